use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use ta_core::{Error, Operation, Pipeline, Result};

use crate::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Summarization,
    Translation,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<GenerationParameters>,
    options: RequestOptions,
}

#[derive(Serialize)]
struct GenerationParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    summary_text: Option<String>,
    translation_text: Option<String>,
}

/// A model served by the Hugging Face Inference API (or any server speaking
/// the same protocol).
pub struct HuggingFacePipeline {
    client: Arc<Client>,
    endpoint: String,
    api_token: Option<String>,
    model: String,
    task: Task,
}

impl fmt::Debug for HuggingFacePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFacePipeline")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_deref().map(|_| "<redacted>"))
            .field("task", &self.task)
            .finish()
    }
}

impl HuggingFacePipeline {
    pub fn new(client: Arc<Client>, config: &Config, model: &str, task: Task) -> Result<Self> {
        let base = config.api_url()?;
        let endpoint = format!("{}/models/{}", base.as_str().trim_end_matches('/'), model);
        Ok(Self {
            client,
            endpoint,
            api_token: config.api_token.clone(),
            model: model.to_string(),
            task,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parameters(&self, operation: &Operation) -> Result<Option<GenerationParameters>> {
        match (self.task, operation) {
            (Task::Summarization, Operation::Summarize(length)) => Ok(Some(GenerationParameters {
                min_length: length.min_length,
                max_length: length.max_length,
                do_sample: false,
            })),
            (Task::Translation, Operation::Translate(_)) => Ok(None),
            (task, op) => Err(Error::InvalidInput(format!(
                "{} pipeline cannot run a {} operation",
                match task {
                    Task::Summarization => "summarization",
                    Task::Translation => "translation",
                },
                op.kind()
            ))),
        }
    }

    fn extract(&self, outputs: Vec<GeneratedText>) -> Result<String> {
        let first = outputs
            .into_iter()
            .next()
            .ok_or_else(|| Error::External(anyhow!("{} returned no output", self.model)))?;
        let text = match self.task {
            Task::Summarization => first.summary_text,
            Task::Translation => first.translation_text,
        };
        text.ok_or_else(|| Error::External(anyhow!("{} returned an unexpected payload", self.model)))
    }
}

#[async_trait]
impl Pipeline for HuggingFacePipeline {
    fn name(&self) -> &str {
        &self.model
    }

    async fn infer(&self, text: &str, operation: &Operation) -> Result<String> {
        let request = InferenceRequest {
            inputs: text,
            parameters: self.parameters(operation)?,
            options: RequestOptions { wait_for_model: true },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::External(anyhow!(
                "{} responded with {}: {}",
                self.model,
                status,
                body
            )));
        }

        let outputs = response.json::<Vec<GeneratedText>>().await?;
        self.extract(outputs)
    }
}
