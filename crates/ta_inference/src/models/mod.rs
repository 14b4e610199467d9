use std::sync::Arc;

use reqwest::Client;
use ta_core::{Pipeline, PipelineKind, PipelineRegistry, Result};
use tracing::info;

use crate::{Backend, Config};

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyPipeline;
pub use huggingface::{HuggingFacePipeline, Task};

/// Load every pipeline once. The returned registry is shared by all requests
/// for the lifetime of the process.
pub async fn create_registry(config: &Config) -> Result<Arc<PipelineRegistry>> {
    let registry = match config.backend {
        Backend::Dummy => PipelineRegistry::new()
            .with_pipeline(
                PipelineKind::Summarizer,
                Arc::new(DummyPipeline::new(format!("dummy:{}", config.summarization_model))),
            )
            .with_pipeline(
                PipelineKind::TranslatorEnAr,
                Arc::new(DummyPipeline::new(format!("dummy:{}", config.en_ar_model))),
            )
            .with_pipeline(
                PipelineKind::TranslatorArEn,
                Arc::new(DummyPipeline::new(format!("dummy:{}", config.ar_en_model))),
            ),
        Backend::Huggingface => {
            if config.api_token.is_none() {
                tracing::warn!("No API token configured, requests may be rate limited");
            }
            let client = Arc::new(Client::builder().timeout(config.timeout()).build()?);
            let load = |model: &str, task: Task| -> Result<Arc<dyn Pipeline>> {
                Ok(Arc::new(HuggingFacePipeline::new(client.clone(), config, model, task)?))
            };
            PipelineRegistry::new()
                .with_pipeline(
                    PipelineKind::Summarizer,
                    load(&config.summarization_model, Task::Summarization)?,
                )
                .with_pipeline(
                    PipelineKind::TranslatorEnAr,
                    load(&config.en_ar_model, Task::Translation)?,
                )
                .with_pipeline(
                    PipelineKind::TranslatorArEn,
                    load(&config.ar_en_model, Task::Translation)?,
                )
        }
    };

    for (kind, name) in registry.loaded() {
        info!("🧠 Loaded {} pipeline ({})", kind, name);
    }

    Ok(Arc::new(registry))
}
