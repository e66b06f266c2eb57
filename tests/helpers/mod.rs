//! Shared test setup: fake mailers and app construction.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use financeflow::config::{Config, ObservabilityConfig, ServerConfig};
use financeflow_notification::{EmailConfig, Mailer, Notification};

/// Mailer that records every delivery instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Notification {
        self.sent
            .lock()
            .unwrap()
            .last()
            .expect("no notification was delivered")
            .clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn deliver(&self, notification: Notification) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Mailer whose deliveries always fail.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn deliver(&self, _notification: Notification) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("smtp connection refused"))
    }
}

pub const TEST_CONTACT_ADDRESS: &str = "ops@financeflow.test";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            contact_address: TEST_CONTACT_ADDRESS.to_string(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn setup_test_app(mailer: Arc<dyn Mailer>) -> Router {
    financeflow::create_app(test_config(), mailer)
}
