use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use financeflow_notification::EmailConfig;
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
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FINANCEFLOW__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (FINANCEFLOW__EMAIL__SMTP_HOST, etc.)
        builder = builder.add_source(
            Environment::with_prefix("FINANCEFLOW")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the legacy environment variable names the
        // original deployment used. SMTP_USER doubles as the sender
        // identity, matching the original's outbound `from`.
        if let Ok(smtp_user) = env::var("SMTP_USER") {
            builder = builder.set_override("email.smtp_username", smtp_user.clone())?;
            builder = builder.set_override("email.from_address", smtp_user)?;
        }
        if let Ok(smtp_password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", smtp_password)?;
        }
        if let Ok(contact_email) = env::var("CONTACT_EMAIL") {
            builder = builder.set_override("email.contact_address", contact_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Mail settings are intentionally not checked here; their absence
    /// surfaces only as a delivery-time failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
