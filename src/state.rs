// src/state.rs
use std::sync::Arc;

use crate::config::{Config, MailCredentials};
use crate::services::llm::{GeminiClient, TextGenerator};
use crate::services::mailer::{Mailer, SmtpMailer};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    /// `None` when sender credentials are missing or unusable.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { generator, mailer }
    }

    pub fn from_config(config: &Config) -> Self {
        let generator = GeminiClient::new(config.gemini_api_key.clone(), &config.gemini_model);
        let mailer = config.mail.as_ref().and_then(smtp_mailer);

        Self::new(Arc::new(generator), mailer)
    }
}

/// A broken sender account only disables email; the rest of the service stays up.
fn smtp_mailer(creds: &MailCredentials) -> Option<Arc<dyn Mailer>> {
    match SmtpMailer::new(creds) {
        Ok(mailer) => Some(Arc::new(mailer)),
        Err(e) => {
            tracing::error!(error = ?e, "email sending disabled");
            None
        }
    }
}
