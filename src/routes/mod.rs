use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use financeflow_notification::Mailer;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

mod assets;
mod contact;
mod health;
mod landing;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::page))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
