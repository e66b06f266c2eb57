mod contact;
mod service;

pub use contact::*;
pub use service::*;

use async_trait::async_trait;

/// An outbound email, fully rendered and ready for transport.
#[derive(Debug, Clone)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// The mail collaborator. Constructed once at process start and
/// injected into the handler state, so tests can substitute a fake.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, notification: Notification) -> anyhow::Result<()>;
}
