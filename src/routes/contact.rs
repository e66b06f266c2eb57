use axum::{Json, extract::State, response::IntoResponse};
use financeflow_notification::{Submission, SubmitFormInput};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

/// POST /api/contact - relay a contact form submission to the
/// operator mailbox.
///
/// The payload is parsed into a validated [`Submission`] before any
/// other work happens; an invalid payload never reaches the mailer.
pub async fn action(
    State(app_state): State<AppState>,
    Json(input): Json<SubmitFormInput>,
) -> Result<impl IntoResponse, AppError> {
    let submission = Submission::parse(input)?;

    let notification = submission
        .notification(&app_state.config.email.contact_address)
        .map_err(|e| AppError::Delivery(e.into()))?;

    tracing::info!(name = %submission.name, "Relaying contact form submission");

    app_state
        .mailer
        .deliver(notification)
        .await
        .map_err(AppError::Delivery)?;

    Ok(Json(json!({ "success": true })))
}
