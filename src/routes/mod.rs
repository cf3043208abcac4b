use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

mod contact;
mod health;
mod services;

pub use contact::SendEmailResponse;

#[derive(Clone)]
pub struct AppState {
    pub contact_command: goldensmile_contact::Command,
}

pub fn router(app_state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(services::list))
        .route("/api/send-email", post(contact::send_email))
        .with_state(app_state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
