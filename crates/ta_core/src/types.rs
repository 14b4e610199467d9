use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_MIN_LENGTH: u32 = 30;
pub const DEFAULT_MAX_LENGTH: u32 = 250;

pub const SUMMARIZE_CHUNK_CHARS: usize = 1024;
pub const TRANSLATE_CHUNK_CHARS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Summarize,
    Translate,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Summarize => f.write_str("summarize"),
            OperationKind::Translate => f.write_str("translate"),
        }
    }
}

/// Bounds on the length the summarizer generates for each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLength {
    pub min_length: u32,
    pub max_length: u32,
}

impl SummaryLength {
    pub fn new(min_length: u32, max_length: u32) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::InvalidInput("max_length must be greater than 0".to_string()));
        }
        if min_length > max_length {
            return Err(Error::InvalidInput(format!(
                "min_length ({}) must not exceed max_length ({})",
                min_length, max_length
            )));
        }
        Ok(Self { min_length, max_length })
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    /// Language codes are compared case-insensitively.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.trim().to_lowercase(),
            target: target.trim().to_lowercase(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Summarize(SummaryLength),
    Translate(LanguagePair),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Summarize(_) => OperationKind::Summarize,
            Operation::Translate(_) => OperationKind::Translate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    Summarizer,
    TranslatorEnAr,
    TranslatorArEn,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 3] = [
        PipelineKind::Summarizer,
        PipelineKind::TranslatorEnAr,
        PipelineKind::TranslatorArEn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Summarizer => "summarizer",
            PipelineKind::TranslatorEnAr => "translator_en_ar",
            PipelineKind::TranslatorArEn => "translator_ar_en",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum chunk size per operation. Summarization and translation never
/// share a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSettings {
    pub summarize_max_chars: usize,
    pub translate_max_chars: usize,
}

impl ChunkSettings {
    pub fn new(summarize_max_chars: usize, translate_max_chars: usize) -> Result<Self> {
        if summarize_max_chars == 0 || translate_max_chars == 0 {
            return Err(Error::Config("chunk sizes must be greater than 0".to_string()));
        }
        Ok(Self {
            summarize_max_chars,
            translate_max_chars,
        })
    }

    pub fn max_chars(&self, kind: OperationKind) -> usize {
        match kind {
            OperationKind::Summarize => self.summarize_max_chars,
            OperationKind::Translate => self.translate_max_chars,
        }
    }
}

impl Default for ChunkSettings {
    fn default() -> Self {
        Self {
            summarize_max_chars: SUMMARIZE_CHUNK_CHARS,
            translate_max_chars: TRANSLATE_CHUNK_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_length_validation() {
        assert!(SummaryLength::new(30, 250).is_ok());
        assert!(SummaryLength::new(10, 10).is_ok());
        assert!(matches!(SummaryLength::new(300, 250), Err(Error::InvalidInput(_))));
        assert!(matches!(SummaryLength::new(0, 0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_language_pair_normalizes_codes() {
        let pair = LanguagePair::new(" EN ", "Ar");
        assert_eq!(pair.source, "en");
        assert_eq!(pair.target, "ar");
        assert!(!pair.is_identity());
        assert!(LanguagePair::new("en", "EN").is_identity());
    }

    #[test]
    fn test_chunk_settings_are_per_operation() {
        let settings = ChunkSettings::default();
        assert_eq!(settings.max_chars(OperationKind::Summarize), 1024);
        assert_eq!(settings.max_chars(OperationKind::Translate), 512);
        assert!(ChunkSettings::new(0, 512).is_err());
    }
}
