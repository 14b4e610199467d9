use crate::types::{LanguagePair, Operation, PipelineKind};
use crate::{Error, Result};

/// Supported translation directions.
const TRANSLATION_ROUTES: &[(&str, &str, PipelineKind)] = &[
    ("en", "ar", PipelineKind::TranslatorEnAr),
    ("ar", "en", PipelineKind::TranslatorArEn),
];

pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = Vec::new();
    for code in TRANSLATION_ROUTES
        .iter()
        .flat_map(|(source, target, _)| [*source, *target])
    {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

/// Supported codes as listed to users, e.g. `'en' or 'ar'`.
fn describe_supported() -> String {
    let quoted: Vec<String> = supported_languages()
        .iter()
        .map(|code| format!("'{}'", code))
        .collect();
    match quoted.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    }
}

/// Pick the pipeline that serves `operation`.
pub fn route(operation: &Operation) -> Result<PipelineKind> {
    match operation {
        Operation::Summarize(_) => Ok(PipelineKind::Summarizer),
        Operation::Translate(pair) => route_translation(pair),
    }
}

fn route_translation(pair: &LanguagePair) -> Result<PipelineKind> {
    if pair.is_identity() {
        return Err(Error::InvalidLanguagePair {
            source_lang: pair.source.clone(),
            target_lang: pair.target.clone(),
        });
    }

    TRANSLATION_ROUTES
        .iter()
        .find(|(source, target, _)| *source == pair.source && *target == pair.target)
        .map(|(_, _, kind)| *kind)
        .ok_or_else(|| Error::UnsupportedLanguagePair {
            source_lang: pair.source.clone(),
            target_lang: pair.target.clone(),
            supported: describe_supported(),
        })
}
