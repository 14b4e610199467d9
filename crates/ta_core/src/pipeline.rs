use std::fmt;

use async_trait::async_trait;

use crate::types::Operation;
use crate::Result;

/// A loaded inference capability: text in, text out.
///
/// Implementations are shared between concurrent requests, so `infer` must be
/// safe to call from several tasks at once.
#[async_trait]
pub trait Pipeline: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Run the model on a single chunk. `operation` carries the
    /// operation-specific parameters, e.g. summary length bounds.
    async fn infer(&self, text: &str, operation: &Operation) -> Result<String>;
}
