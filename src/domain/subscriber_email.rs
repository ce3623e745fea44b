use super::ValidationError;

/// An email address to send the welcome message to.
///
/// Any non-empty string containing an `@` is accepted. Neither the address grammar
/// nor the domain are checked.
///
/// # Examples
/// Use the `parse` function to build a `SubscriberEmail` from a string.
/// We can then get the email address back out using the `AsRef<str>` implementation.
/// ```
/// use skyscout::domain::SubscriberEmail;
///
/// let email = SubscriberEmail::parse("traveler@example.com".to_string()).unwrap();
/// assert_eq!("traveler@example.com", email.as_ref());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Return `Ok` with a `SubscriberEmail` when `s` contains an `@`.
    /// Otherwise, returns `Err` describing the problem.
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.is_empty() {
            Err(ValidationError::MissingEmail)
        } else if !s.contains('@') {
            Err(ValidationError::MissingAtSign(s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
