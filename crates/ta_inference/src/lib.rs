use std::time::Duration;

use ta_core::{Error, Result};
use url::Url;

pub mod models;
pub mod service;

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
pub const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
pub const TRANSLATION_MODEL_EN_AR: &str = "Helsinki-NLP/opus-mt-en-ar";
pub const TRANSLATION_MODEL_AR_EN: &str = "Helsinki-NLP/opus-mt-ar-en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Hosted Hugging Face Inference API
    Huggingface,
    /// Offline stand-in that needs no model
    Dummy,
}

#[derive(Clone)]
pub struct Config {
    pub backend: Backend,
    pub api_base: String,
    pub api_token: Option<String>,
    pub summarization_model: String,
    pub en_ar_model: String,
    pub ar_en_model: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("api_base", &self.api_base)
            .field("api_token", &self.api_token.as_deref().map(|_| "<redacted>"))
            .field("summarization_model", &self.summarization_model)
            .field("en_ar_model", &self.en_ar_model)
            .field("ar_en_model", &self.ar_en_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Huggingface,
            api_base: DEFAULT_API_BASE.to_string(),
            api_token: None,
            summarization_model: SUMMARIZATION_MODEL.to_string(),
            en_ar_model: TRANSLATION_MODEL_EN_AR.to_string(),
            ar_en_model: TRANSLATION_MODEL_AR_EN.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn api_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("invalid api base '{}': {}", self.api_base, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!("api base '{}' cannot be a base URL", self.api_base)));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub mod prelude {
    pub use super::models::create_registry;
    pub use super::service::{Summary, TextService};
    pub use super::{Backend, Config};
    pub use ta_core::{Error, Result};
}

pub use models::create_registry;
pub use service::{Summary, TextService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_reference_models() {
        let config = Config::default();
        assert_eq!(config.summarization_model, "facebook/bart-large-cnn");
        assert_eq!(config.en_ar_model, "Helsinki-NLP/opus-mt-en-ar");
        assert_eq!(config.ar_en_model, "Helsinki-NLP/opus-mt-ar-en");
        assert!(config.api_url().is_ok());
    }

    #[test]
    fn test_invalid_api_base_is_a_config_error() {
        let config = Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.api_url(), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            api_token: Some("hf_secret".to_string()),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hf_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
