use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use goldensmile_contact::ContactSubmission;
use goldensmile_notification::Receipt;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub data: Receipt,
}

/// POST /api/send-email - Contact form submission
pub async fn send_email(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let Json(input) = payload?;

    let receipt = app_state.contact_command.submit(input).await?;

    Ok(Json(SendEmailResponse {
        success: true,
        data: receipt,
    }))
}
