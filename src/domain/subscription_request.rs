use serde::Deserialize;

use super::{SubscriberEmail, ValidationError};

/// The JSON body submitted by the landing page form.
///
/// `email` is optional here so that a body without it reaches validation and is
/// rejected as an invalid address rather than as an unreadable payload.
#[derive(Deserialize, Debug)]
pub struct SubscriptionRequest {
    pub email: Option<String>,
}

impl TryFrom<SubscriptionRequest> for SubscriberEmail {
    type Error = ValidationError;

    fn try_from(value: SubscriptionRequest) -> Result<Self, Self::Error> {
        let email = value.email.ok_or(ValidationError::MissingEmail)?;
        SubscriberEmail::parse(email)
    }
}
