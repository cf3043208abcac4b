use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map, Source, Value};
use goldensmile_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the built landing page, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Unprefixed provider variables and the config keys they feed
const LEGACY_VARS: [(&str, &str); 3] = [
    ("RESEND_API_KEY", "email.resend.api_key"),
    ("NOTIFICATION_EMAIL", "email.notification_address"),
    ("SMTP_PASSWORD", "email.smtp.password"),
];

/// Config source for [`LEGACY_VARS`]. Unset or blank variables are skipped
/// so they never mask a value from a lower layer.
#[derive(Debug, Clone)]
struct LegacyEnvironment;

impl Source for LegacyEnvironment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let mut values = Map::new();

        for (var, key) in LEGACY_VARS {
            let Some(value) = env::var(var).ok().filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            let origin = var.to_string();
            values.insert(key.to_string(), Value::new(Some(&origin), value));
        }

        Ok(values)
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GOLDENSMILE__SERVER__PORT, etc.)
    /// 2. Provider variables without prefix (RESEND_API_KEY, NOTIFICATION_EMAIL, SMTP_PASSWORD)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(LegacyEnvironment).add_source(
            Environment::with_prefix("GOLDENSMILE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.resend.timeout_secs == 0 {
            return Err("Email provider timeout must be at least 1 second".to_string());
        }
        self.email.validate()
    }
}
