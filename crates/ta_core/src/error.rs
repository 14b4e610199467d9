use thiserror::Error;

use crate::types::OperationKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter some text to {0}.")]
    EmptyInput(OperationKind),

    #[error("Source and target languages must be different.")]
    InvalidLanguagePair { source_lang: String, target_lang: String },

    #[error("Unsupported language pair. Use {supported}.")]
    UnsupportedLanguagePair {
        source_lang: String,
        target_lang: String,
        supported: String,
    },

    #[error("Pipeline {pipeline} failed on chunk {chunk}: {message}")]
    Pipeline {
        pipeline: String,
        chunk: usize,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Message returned to the caller instead of a failure when there is
    /// nothing to run: empty input, identical languages or an unsupported pair.
    pub fn sentinel(&self) -> Option<String> {
        match self {
            Error::EmptyInput(_)
            | Error::InvalidLanguagePair { .. }
            | Error::UnsupportedLanguagePair { .. } => Some(self.to_string()),
            _ => None,
        }
    }

    pub fn is_pipeline_failure(&self) -> bool {
        matches!(self, Error::Pipeline { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
