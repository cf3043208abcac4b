use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A fully composed message ready to hand to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgment. The id is opaque and passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),

    #[error("Invalid email address: {0}")]
    Address(String),

    #[error("Failed to build email message: {0}")]
    Message(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<lettre::address::AddressError> for DeliveryError {
    fn from(value: lettre::address::AddressError) -> Self {
        Self::Address(value.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for DeliveryError {
    fn from(value: lettre::transport::smtp::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<lettre::error::Error> for DeliveryError {
    fn from(value: lettre::error::Error) -> Self {
        Self::Message(value.to_string())
    }
}

/// Transactional email provider.
///
/// Implementations make exactly one delivery attempt per call.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<Receipt, DeliveryError>;
}
