use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{SubscriberEmail, ValidationError};
use crate::email_client::EmailClient;

/// App-wide configuration
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Settings needed to talk to the email delivery API.
#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    /// The address every welcome email is sent from.
    pub fn sender(&self) -> Result<SubscriberEmail, ValidationError> {
        SubscriberEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// Builds the production email client out of these settings.
    pub fn client(self) -> anyhow::Result<EmailClient> {
        let base_url = url::Url::parse(&self.base_url)?;
        let sender = self.sender()?;
        let timeout = self.timeout();
        let client = EmailClient::new(base_url, sender, self.authorization_token, timeout)?;
        Ok(client)
    }
}

/// The runtime environment for the app.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Reads app configuration from the `configuration` directory.
///
/// `base.yaml` is always read, followed by `local.yaml` or `production.yaml` depending
/// on `APP_ENVIRONMENT` (defaults to `local`). Values can then be overridden with
/// `APP_`-prefixed environment variables, e.g. `APP_APPLICATION__PORT=5001`.
///
/// The Resend credential is also picked up from `RESEND_API_KEY` when it is set.
///
/// Returns an error if a file is missing or malformed, or if a required value (such as
/// the delivery API token) was not provided by any source.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "email_client.authorization_token",
            std::env::var("RESEND_API_KEY").ok(),
        )?
        .build()?
        .try_deserialize()
}
