mod subscriber_email;
mod subscription_request;
mod welcome_email;

pub use subscriber_email::SubscriberEmail;
pub use subscription_request::SubscriptionRequest;
pub use welcome_email::WelcomeEmail;

/// Reasons a subscription request can be turned away before anything is sent.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("no email address was provided")]
    MissingEmail,
    #[error("{0} does not contain an `@`")]
    MissingAtSign(String),
    #[error("the request body could not be read: {0}")]
    MalformedPayload(String),
}
