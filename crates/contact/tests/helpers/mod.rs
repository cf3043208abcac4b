use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use goldensmile_contact::{Command, ContactSubmission};
use goldensmile_notification::{DeliveryError, EmailService, Mailer, OutboundEmail, Receipt};

pub const FROM: &str = "Golden Smile Creation <onboarding@resend.dev>";
pub const TO: &str = "contact@goldensmilecreation.com";

/// Records every send and answers with a fixed outcome
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

    #[allow(dead_code)]
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
                id: "4ef9a417-02e9-4d39-ad75-9611e0fcc33c".to_owned(),
            }),
        }
    }
}

pub fn command(mailer: &RecordingMailer) -> Command {
    Command::new(EmailService::configured(mailer.clone()), FROM, TO)
}

pub fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: None,
        service: Some("teeth-whitening".to_owned()),
        message: "Hello,\nI would like to book a cleaning.".to_owned(),
    }
}
