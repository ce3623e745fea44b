use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use url::Url;

use crate::domain::SubscriberEmail;

/// Something that can deliver an email on our behalf.
///
/// The subscribe endpoint only ever talks to this trait, so a test double can stand
/// in for the real delivery API.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Sends `html_content` to `recipient` with the given `subject`. One attempt only.
    async fn send(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        html_content: &str,
    ) -> anyhow::Result<()>;
}

/// An email client backed by the Resend HTTP API.
#[derive(Debug)]
pub struct EmailClient {
    sender: SubscriberEmail,
    http_client: Client,
    send_url: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    /// Creates an email client. Emails will be sent from `sender`.
    ///
    /// `base_url` is where the delivery API lives; requests go to `{base_url}/emails`.
    /// `authorization_token` is sent as a bearer token with every request, and each
    /// request is abandoned after `timeout`.
    ///
    /// Fails if `base_url` cannot be joined with the send path, or if the HTTP
    /// client cannot be built.
    pub fn new(
        base_url: Url,
        sender: SubscriberEmail,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let send_url = base_url
            .join("emails")
            .context("Failed to build the email delivery URL")?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self {
            sender,
            http_client,
            send_url,
            authorization_token,
        })
    }

    /// Sends an email to `recipient`. The subject line will be `subject` and the
    /// body will be `html_content`.
    ///
    /// Returns an `Err` if the API can't be reached, doesn't answer within the
    /// timeout, or answers with a non-success status.
    pub async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            html: html_content,
        };

        self.http_client
            .post(self.send_url.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl Notifier for EmailClient {
    async fn send(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        html_content: &str,
    ) -> anyhow::Result<()> {
        self.send_email(recipient, subject, html_content)
            .await
            .context("Failed to send an email through the delivery API")
    }
}

/// The format of a request body required by the Resend send API
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}
