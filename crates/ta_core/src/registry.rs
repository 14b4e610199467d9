use std::collections::BTreeMap;
use std::sync::Arc;

use crate::pipeline::Pipeline;
use crate::types::PipelineKind;
use crate::{Error, Result};

/// The process-wide set of loaded pipelines. Built once before serving and
/// never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PipelineRegistry {
    pipelines: BTreeMap<PipelineKind, Arc<dyn Pipeline>>,
}

impl PipelineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pipeline(mut self, kind: PipelineKind, pipeline: Arc<dyn Pipeline>) -> Self {
        self.pipelines.insert(kind, pipeline);
        self
    }

    pub fn get(&self, kind: PipelineKind) -> Result<&Arc<dyn Pipeline>> {
        self.pipelines
            .get(&kind)
            .ok_or_else(|| Error::Config(format!("pipeline {} is not loaded", kind)))
    }

    pub fn loaded(&self) -> impl Iterator<Item = (PipelineKind, &str)> {
        self.pipelines.iter().map(|(kind, p)| (*kind, p.name()))
    }

    pub fn is_complete(&self) -> bool {
        PipelineKind::ALL.iter().all(|k| self.pipelines.contains_key(k))
    }
}
