use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use financeflow_notification::MissingFields;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Failed to send message")]
    Delivery(anyhow::Error),
}

impl From<MissingFields> for AppError {
    fn from(_: MissingFields) -> Self {
        AppError::MissingFields
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields" })),
            )
                .into_response(),
            AppError::Delivery(e) => {
                // Log the collaborator failure; the caller only ever
                // sees the generic message.
                tracing::error!(error = ?e, "Failed to deliver contact notification");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to send message" })),
                )
                    .into_response()
            }
        }
    }
}
