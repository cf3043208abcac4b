//! Provider selection at process start

use std::sync::Arc;

use crate::{EmailConfig, Mailer, Provider, resend::ResendMailer, smtp::SmtpMailer};

/// Email delivery as seen by callers: either a ready provider or an
/// explicit absence that must be checked before dispatch.
#[derive(Clone)]
pub enum EmailService {
    Configured(Arc<dyn Mailer>),
    Unconfigured,
}

impl EmailService {
    /// Build the provider selected in configuration.
    ///
    /// A missing credential is not an error here; it yields
    /// [`EmailService::Unconfigured`] so the server can still start.
    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Self> {
        let service = match config.provider {
            Provider::Resend if config.resend.api_key.trim().is_empty() => {
                tracing::warn!(
                    provider = %config.provider,
                    "Resend API key is not configured, contact form submissions will fail"
                );
                Self::Unconfigured
            }
            Provider::Resend => Self::configured(ResendMailer::new(&config.resend)?),
            Provider::Smtp if config.smtp.host.trim().is_empty() => {
                tracing::warn!(
                    provider = %config.provider,
                    "SMTP host is not configured, contact form submissions will fail"
                );
                Self::Unconfigured
            }
            Provider::Smtp => Self::configured(SmtpMailer::new(&config.smtp)?),
        };

        Ok(service)
    }

    pub fn configured(mailer: impl Mailer + 'static) -> Self {
        Self::Configured(Arc::new(mailer))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}
