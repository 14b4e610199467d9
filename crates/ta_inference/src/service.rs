use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ta_core::analysis::split_sentences;
use ta_core::{
    combine, process_chunks, route, ChunkSettings, Error, LanguagePair, Operation, OperationKind,
    PipelineRegistry, Result, SummaryLength, TextChunker,
};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
}

/// Chunk, route, run and recombine. One instance serves every request.
#[derive(Clone)]
pub struct TextService {
    registry: Arc<PipelineRegistry>,
    chunks: ChunkSettings,
}

impl fmt::Debug for TextService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextService")
            .field("registry", &"<PipelineRegistry>")
            .field("chunks", &self.chunks)
            .finish()
    }
}

impl TextService {
    pub fn new(registry: Arc<PipelineRegistry>, chunks: ChunkSettings) -> Self {
        Self { registry, chunks }
    }

    pub fn registry(&self) -> &PipelineRegistry {
        &self.registry
    }

    pub async fn summarize(
        &self,
        text: &str,
        min_length: u32,
        max_length: u32,
        bullet_points: bool,
    ) -> Result<Summary> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput(OperationKind::Summarize));
        }
        let length = SummaryLength::new(min_length, max_length)?;

        let summary = self.run(text, Operation::Summarize(length)).await?;
        let bullet_points = bullet_points.then(|| split_sentences(&summary));
        Ok(Summary {
            summary,
            bullet_points,
        })
    }

    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput(OperationKind::Translate));
        }

        self.run(text, Operation::Translate(LanguagePair::new(source, target)))
            .await
    }

    async fn run(&self, text: &str, operation: Operation) -> Result<String> {
        let kind = route(&operation)?;
        let pipeline = self.registry.get(kind)?;

        let chunker = TextChunker::new(self.chunks.max_chars(operation.kind()))?;
        let chunks = chunker.chunk(text);
        info!(
            "{} {} chars in {} chunk(s) with {}",
            operation.kind(),
            text.chars().count(),
            chunks.len(),
            pipeline.name()
        );

        let results = process_chunks(&chunks, pipeline.as_ref(), &operation).await?;
        Ok(combine(&results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use ta_core::types::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
    use ta_core::{Pipeline, PipelineKind};

    /// Records every call and answers with `<name>#<call index>`.
    #[derive(Debug)]
    struct RecordingPipeline {
        name: &'static str,
        fail_at: Option<usize>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingPipeline {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                fail_at: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing_at(name: &'static str, index: usize) -> Arc<Self> {
            Arc::new(Self {
                name,
                fail_at: Some(index),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        fn name(&self) -> &str {
            self.name
        }

        async fn infer(&self, text: &str, _operation: &Operation) -> Result<String> {
            let index = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(text.to_string());
                calls.len() - 1
            };
            if self.fail_at == Some(index) {
                return Err(Error::External(anyhow::anyhow!("CUDA out of memory")));
            }
            Ok(format!("{}#{}", self.name, index))
        }
    }

    struct Fixture {
        service: TextService,
        summarizer: Arc<RecordingPipeline>,
        en_ar: Arc<RecordingPipeline>,
        ar_en: Arc<RecordingPipeline>,
    }

    fn fixture_with(summarizer: Arc<RecordingPipeline>, en_ar: Arc<RecordingPipeline>) -> Fixture {
        let ar_en = RecordingPipeline::new("ar-en");
        let registry = PipelineRegistry::new()
            .with_pipeline(PipelineKind::Summarizer, summarizer.clone())
            .with_pipeline(PipelineKind::TranslatorEnAr, en_ar.clone())
            .with_pipeline(PipelineKind::TranslatorArEn, ar_en.clone());
        Fixture {
            service: TextService::new(Arc::new(registry), ChunkSettings::default()),
            summarizer,
            en_ar,
            ar_en,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(RecordingPipeline::new("sum"), RecordingPipeline::new("en-ar"))
    }

    fn total_calls(f: &Fixture) -> usize {
        f.summarizer.calls().len() + f.en_ar.calls().len() + f.ar_en.calls().len()
    }

    #[tokio::test]
    async fn test_summarize_empty_input_never_calls_a_pipeline() {
        let f = fixture();
        for text in ["", "   ", "\n\t"] {
            let err = f
                .service
                .summarize(text, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, false)
                .await
                .unwrap_err();
            assert_eq!(err.sentinel().as_deref(), Some("Please enter some text to summarize."));
        }
        assert_eq!(total_calls(&f), 0);
    }

    #[tokio::test]
    async fn test_empty_input_wins_over_invalid_lengths() {
        let f = fixture();
        let err = f.service.summarize("  ", 300, 10, false).await.unwrap_err();
        assert_eq!(err.sentinel().as_deref(), Some("Please enter some text to summarize."));

        let err = f.service.summarize("text", 300, 10, false).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(total_calls(&f), 0);
    }

    #[tokio::test]
    async fn test_long_text_is_summarized_in_order() {
        let f = fixture();
        let text = "word ".repeat(2000);
        let summary = f.service.summarize(&text, 30, 250, false).await.unwrap();
        let calls = f.summarizer.calls();
        assert!(calls.len() >= 2);
        for chunk in &calls {
            assert!(chunk.chars().count() <= 1024);
        }
        let expected: Vec<String> = (0..calls.len()).map(|i| format!("sum#{}", i)).collect();
        assert_eq!(summary.summary, expected.join(" "));
        assert!(summary.bullet_points.is_none());
    }

    #[tokio::test]
    async fn test_bullet_points_split_the_final_summary() {
        let f = fixture();
        let summary = f
            .service
            .summarize("Short text.", DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, true)
            .await
            .unwrap();
        assert_eq!(summary.summary, "sum#0");
        assert_eq!(summary.bullet_points, Some(vec!["sum#0".to_string()]));
    }

    #[tokio::test]
    async fn test_translate_routes_to_en_ar_once() {
        let f = fixture();
        let translation = f.service.translate("Hello world", "en", "ar").await.unwrap();
        assert_eq!(translation, "en-ar#0");
        assert_eq!(f.en_ar.calls(), vec!["Hello world".to_string()]);
        assert!(f.ar_en.calls().is_empty());
        assert!(f.summarizer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_translate_ar_en_direction() {
        let f = fixture();
        let translation = f.service.translate("مرحبا", "ar", "en").await.unwrap();
        assert_eq!(translation, "ar-en#0");
        assert!(f.en_ar.calls().is_empty());
    }

    #[tokio::test]
    async fn test_translate_uses_smaller_chunks() {
        let f = fixture();
        let text = "word ".repeat(200);
        f.service.translate(&text, "en", "ar").await.unwrap();
        let calls = f.en_ar.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.chars().count() <= 512));
    }

    #[tokio::test]
    async fn test_translate_rejections_never_call_a_pipeline() {
        let f = fixture();

        let err = f.service.translate("Hello", "en", "en").await.unwrap_err();
        assert!(matches!(err, Error::InvalidLanguagePair { .. }));

        let err = f.service.translate("Hello", "en", "fr").await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguagePair { .. }));

        let err = f.service.translate("  ", "en", "ar").await.unwrap_err();
        assert_eq!(err.sentinel().as_deref(), Some("Please enter some text to translate."));

        assert_eq!(total_calls(&f), 0);
    }

    #[tokio::test]
    async fn test_failure_on_second_chunk_fails_the_request() {
        let f = fixture_with(RecordingPipeline::failing_at("sum", 1), RecordingPipeline::new("en-ar"));
        let text = "word ".repeat(2000);

        let err = f
            .service
            .summarize(&text, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, true)
            .await
            .unwrap_err();
        assert!(err.is_pipeline_failure());
        assert!(err.sentinel().is_none());
        assert_eq!(f.summarizer.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_translation_failure_fails_the_request() {
        let f = fixture_with(RecordingPipeline::new("sum"), RecordingPipeline::failing_at("en-ar", 1));
        let text = "word ".repeat(300);
        let err = f.service.translate(&text, "en", "ar").await.unwrap_err();
        assert!(err.is_pipeline_failure());
    }
}
