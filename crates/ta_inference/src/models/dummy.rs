use std::fmt;

use ta_core::{Operation, Pipeline, Result};

const SUMMARY_WORDS: usize = 20;

/// Model-free stand-in for local development: summaries keep the leading
/// words of each chunk, translations return the input unchanged.
pub struct DummyPipeline {
    name: String,
}

impl fmt::Debug for DummyPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyPipeline").field("name", &self.name).finish()
    }
}

impl DummyPipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Pipeline for DummyPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    async fn infer(&self, text: &str, operation: &Operation) -> Result<String> {
        match operation {
            Operation::Summarize(length) => {
                let limit = SUMMARY_WORDS.min(length.max_length as usize);
                let words: Vec<&str> = text.split_whitespace().take(limit).collect();
                Ok(words.join(" "))
            }
            Operation::Translate(_) => Ok(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_core::{LanguagePair, SummaryLength};

    #[tokio::test]
    async fn test_dummy_pipeline() {
        let pipeline = DummyPipeline::new("dummy-summarizer");
        assert_eq!(pipeline.name(), "dummy-summarizer");

        let text = "one two three four five six seven eight nine ten eleven twelve \
                    thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty \
                    twenty-one twenty-two";
        let op = Operation::Summarize(SummaryLength::default());
        let summary = pipeline.infer(text, &op).await.unwrap();
        assert_eq!(summary.split_whitespace().count(), 20);
        assert!(summary.starts_with("one two three"));

        let short = Operation::Summarize(SummaryLength::new(1, 3).unwrap());
        assert_eq!(pipeline.infer(text, &short).await.unwrap(), "one two three");

        let op = Operation::Translate(LanguagePair::new("en", "ar"));
        assert_eq!(pipeline.infer("Hello world", &op).await.unwrap(), "Hello world");
    }
}
