use axum::Json;
use goldensmile_contact::{Service, ServiceEntry};

/// GET /api/services - Options for the contact form's service select
pub async fn list() -> Json<Vec<ServiceEntry>> {
    Json(Service::catalogue())
}
