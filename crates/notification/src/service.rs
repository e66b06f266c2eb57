//! Email delivery service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{Mailer, Notification};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_from_address() -> String {
    "noreply@financeflow.app".to_string()
}

fn default_contact_address() -> String {
    "contact@financeflow.app".to_string()
}

/// SMTP-backed [`Mailer`]. The transport is built once and reused for
/// every delivery; there is no teardown.
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn deliver(&self, notification: Notification) -> anyhow::Result<()> {
        tracing::info!(
            to = %notification.to,
            subject = %notification.subject,
            "Sending email"
        );

        let message = Message::builder()
            .from(self.from.parse()?)
            .to(notification.to.parse()?)
            .subject(notification.subject)
            .multipart(MultiPart::alternative_plain_html(
                notification.plain,
                notification.html,
            ))?;

        self.mailer.send(&message)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_builds_without_credentials() {
        let config = EmailConfig::default();
        assert!(EmailService::new(&config).is_ok());
    }

    #[test]
    fn service_builds_with_credentials() {
        let config = EmailConfig {
            smtp_username: "ops@financeflow.app".to_string(),
            smtp_password: "hunter2".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            ..EmailConfig::default()
        };
        assert!(EmailService::new(&config).is_ok());
    }
}
