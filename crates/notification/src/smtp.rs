//! SMTP relay delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use uuid::Uuid;

use crate::{DeliveryError, Mailer, OutboundEmail, Receipt, SmtpConfig};

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP email service initialized with authentication and TLS"
            );

            // relay() negotiates STARTTLS
            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

/// Build the MIME message and the Message-ID used as the receipt id.
fn build_message(email: OutboundEmail) -> Result<(Message, String), DeliveryError> {
    let from: Mailbox = email.from.parse()?;
    let to: Mailbox = email.to.parse()?;
    let reply_to: Mailbox = email.reply_to.parse()?;
    let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

    let message = Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(email.subject)
        .message_id(Some(message_id.clone()))
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))?;

    Ok((message, message_id))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<Receipt, DeliveryError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email via SMTP");

        let (message, id) = build_message(email)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))??;

        Ok(Receipt { id })
    }
}
