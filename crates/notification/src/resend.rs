//! Resend-compatible transactional email API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, Mailer, OutboundEmail, Receipt, ResendConfig};

pub struct ResendMailer {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Error body returned by the provider on non-2xx responses
#[derive(Deserialize)]
struct ProviderFailure {
    message: Option<String>,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Resend email client initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<Receipt, DeliveryError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email via Resend");

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: [&email.to],
                reply_to: &email.reply_to,
                subject: &email.subject,
                html: &email.html,
                text: &email.text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderFailure>()
                .await
                .ok()
                .and_then(|failure| failure.message)
                .unwrap_or_else(|| format!("Email provider responded with {status}"));

            return Err(DeliveryError::Rejected(message));
        }

        Ok(response.json::<Receipt>().await?)
    }
}
