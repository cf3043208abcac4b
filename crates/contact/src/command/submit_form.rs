use std::sync::LazyLock;

use goldensmile_notification::{EmailService, Receipt};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::{ContactNotification, Error, INVALID_EMAIL, MISSING_FIELDS};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// One contact form payload. Missing keys and JSON `null` both read as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "required"),
        regex(path = *EMAIL_PATTERN, code = "email")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "required"))]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

impl ContactSubmission {
    /// Server-side validation. Missing fields are reported before a
    /// malformed email, so an empty email reads as missing.
    pub fn check(&self) -> crate::Result<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == "required");

        if missing {
            return Err(Error::Validation(MISSING_FIELDS.to_owned()));
        }

        Err(Error::Validation(INVALID_EMAIL.to_owned()))
    }
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn submit(&self, input: ContactSubmission) -> crate::Result<Receipt> {
        if let Err(err) = input.check() {
            tracing::warn!(error = %err, "Contact form submission rejected");
            return Err(err);
        }

        let EmailService::Configured(mailer) = &self.email else {
            tracing::error!("Email service is not configured, contact form submission dropped");
            return Err(Error::Configuration);
        };

        let email = ContactNotification::new(&input).compose(&self.from, &self.to)?;

        match mailer.send(email).await {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "Contact notification sent");
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to send contact notification");
                Err(err.into())
            }
        }
    }
}
