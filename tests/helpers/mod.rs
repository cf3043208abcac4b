//! Test helpers for driving the router without a network listener

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use goldensmile::{AppState, router};
use goldensmile_notification::{DeliveryError, EmailService, Mailer, OutboundEmail, Receipt};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PROVIDER_ID: &str = "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794";

/// Provider double that records sends and returns a fixed outcome
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
    pub failure: Option<String>,
}

impl RecordingMailer {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<Receipt, DeliveryError> {
        self.sent.lock().unwrap().push(email);

        match &self.failure {
            Some(message) => Err(DeliveryError::Rejected(message.to_owned())),
            None => Ok(Receipt {
                id: PROVIDER_ID.to_owned(),
            }),
        }
    }
}

pub fn app(email: EmailService) -> Router {
    let state = AppState {
        contact_command: goldensmile_contact::Command::new(
            email,
            "Golden Smile Creation <onboarding@resend.dev>",
            "contact@goldensmilecreation.com",
        ),
    };

    router(state, None)
}

pub fn app_with(mailer: &RecordingMailer) -> Router {
    app(EmailService::configured(mailer.clone()))
}

pub async fn post_json(
    app: Router,
    body: impl Into<String>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}

pub async fn get_json(app: Router, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
