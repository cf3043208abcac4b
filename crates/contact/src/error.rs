pub const MISSING_FIELDS: &str = "Name, email, and message are required";
pub const INVALID_EMAIL: &str = "Invalid email address";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied data failed a required-field or format check
    #[error("{0}")]
    Validation(String),

    /// No email provider credential in this deployment
    #[error("Email service is not configured")]
    Configuration,

    /// The provider failed or rejected the send
    #[error("{0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<goldensmile_notification::DeliveryError> for Error {
    fn from(value: goldensmile_notification::DeliveryError) -> Self {
        Self::Delivery(value.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(value: askama::Error) -> Self {
        Self::Delivery(format!("Failed to render notification: {value}"))
    }
}
