// src/config.rs
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Sender account used to log in to the SMTP relay.
#[derive(Clone)]
pub struct MailCredentials {
    pub username: String,
    pub app_password: String,
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Where the page templates and static assets live on disk.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub mail: Option<MailCredentials>,
    pub port: u16,
    pub site: SiteConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<set>"))
            .field("gemini_model", &self.gemini_model)
            .field("mail", &self.mail)
            .field("port", &self.port)
            .field("site", &self.site)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mail = match (get("MAIL_USERNAME"), get("MAIL_APP_PASSWORD")) {
            (Some(username), Some(app_password)) => Some(MailCredentials {
                username,
                app_password,
            }),
            _ => None,
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            templates_dir: get("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        };

        Ok(Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            mail,
            port,
            site,
        })
    }
}
