use lettre::message::Mailbox;
use serde::Deserialize;
use strum::Display;

/// Which transport delivers outbound email
#[derive(Debug, Deserialize, Display, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_notification_address")]
    pub notification_address: String,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            from_address: default_from_address(),
            notification_address: default_notification_address(),
            resend: ResendConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl EmailConfig {
    /// Both addresses must parse as mailboxes, `addr@domain` or
    /// `Display Name <addr@domain>`.
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = self.from_address.parse::<Mailbox>() {
            return Err(format!(
                "Email from_address is not a valid mailbox ({e}): {}",
                self.from_address
            ));
        }
        if let Err(e) = self.notification_address.parse::<Mailbox>() {
            return Err(format!(
                "Email notification_address is not a valid mailbox ({e}): {}",
                self.notification_address
            ));
        }
        Ok(())
    }
}

fn default_from_address() -> String {
    "Golden Smile Creation <onboarding@resend.dev>".to_string()
}

fn default_notification_address() -> String {
    "contact@goldensmilecreation.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_resend_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_resend_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_resend_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}
