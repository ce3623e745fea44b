use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::{SubscriberEmail, SubscriptionRequest, ValidationError, WelcomeEmail};
use crate::email_client::Notifier;

/// Everything that can go wrong while handling a subscription.
#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid email address")]
    InvalidInput(#[from] ValidationError),
    #[error("Failed to subscribe. Please try again.")]
    DeliveryFailed(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubscribeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SubscribeError::DeliveryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let SubscribeError::MethodNotAllowed = self {
            response.insert_header((header::ALLOW, "POST"));
        }
        // The Display impl only ever carries the public message, never the cause.
        response.json(ErrorBody {
            error: self.to_string(),
        })
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct SubscribeResponse {
    success: bool,
}

/// Turns an unreadable JSON body into the same rejection as a bad address.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    SubscribeError::from(ValidationError::MalformedPayload(err.to_string())).into()
}

/// Validates the submitted address and sends it the welcome email.
///
/// Nothing is stored: a successful call results in exactly one email, and calling
/// again with the same address sends another one.
#[tracing::instrument(
    name = "Subscribing a new traveler",
    skip(request, notifier),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe<N: Notifier>(
    request: web::Json<SubscriptionRequest>,
    notifier: web::Data<N>,
) -> Result<HttpResponse, SubscribeError> {
    let email: SubscriberEmail = request.into_inner().try_into()?;
    tracing::Span::current().record("subscriber_email", &tracing::field::display(&email));

    send_welcome_email(notifier.get_ref(), &email)
        .await
        .map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Failed to send the welcome email");
            SubscribeError::DeliveryFailed(e)
        })?;

    Ok(HttpResponse::Ok().json(SubscribeResponse { success: true }))
}

#[tracing::instrument(name = "Sending the welcome email", skip(notifier, email))]
async fn send_welcome_email<N: Notifier>(
    notifier: &N,
    email: &SubscriberEmail,
) -> anyhow::Result<()> {
    notifier
        .send(email, WelcomeEmail::SUBJECT, WelcomeEmail::HTML_BODY)
        .await
}

/// Fallback for every method other than `POST` on the subscribe resource.
pub async fn method_not_allowed() -> Result<HttpResponse, SubscribeError> {
    Err(SubscribeError::MethodNotAllowed)
}
