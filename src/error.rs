use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use goldensmile_contact::Error as ContactError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Contact(ContactError::Validation(_)) | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Contact(ContactError::Configuration | ContactError::Delivery(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
