pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use std::sync::Arc;

use financeflow_notification::Mailer;

/// Create the app router.
///
/// Also the integration-test entry point: tests pass a recording
/// [`Mailer`] here instead of the SMTP-backed one.
pub fn create_app(config: config::Config, mailer: Arc<dyn Mailer>) -> axum::Router {
    routes::router(AppState { config, mailer })
}
