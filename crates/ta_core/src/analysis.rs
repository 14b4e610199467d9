//! Plain text arithmetic that does not need a model: sentence splitting,
//! reading statistics and script-based language detection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const WORDS_PER_MINUTE: f64 = 200.0;

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph"));
static ARABIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Arabic}&&\p{L}]").expect("arabic"));
static LATIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Latin}&&\p{L}]").expect("latin"));

/// Split text into sentence-like units ending at `.`, `!` or `?`. Trailing
/// text without terminal punctuation is kept as the last unit.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_seconds: u64,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let sentences = split_sentences(text).len();
        let paragraphs = PARAGRAPH_BREAK_RE
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count();
        let reading_time_seconds = (words as f64 / WORDS_PER_MINUTE * 60.0).round() as u64;

        Self {
            characters: text.chars().count(),
            words,
            sentences,
            paragraphs,
            reading_time_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub confidence: f64,
}

/// Guess between the supported languages by counting Arabic and Latin
/// letters.
pub fn detect_language(text: &str) -> DetectedLanguage {
    let arabic = ARABIC_RE.find_iter(text).count();
    let latin = LATIN_RE.find_iter(text).count();
    let total = arabic + latin;

    if total == 0 {
        return DetectedLanguage {
            language: "unknown".to_string(),
            confidence: 0.0,
        };
    }

    let (language, dominant) = if arabic > latin {
        ("ar", arabic)
    } else {
        ("en", latin)
    };
    let confidence = (dominant as f64 / total as f64 * 100.0).round() / 100.0;

    DetectedLanguage {
        language: language.to_string(),
        confidence,
    }
}
