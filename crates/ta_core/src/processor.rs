use tracing::{debug, error};

use crate::pipeline::Pipeline;
use crate::types::Operation;
use crate::{Error, Result};

/// Run `pipeline` over every chunk in order, one at a time.
///
/// All-or-nothing: the first failing chunk aborts the batch and no partial
/// output is returned.
pub async fn process_chunks(
    chunks: &[String],
    pipeline: &dyn Pipeline,
    operation: &Operation,
) -> Result<Vec<String>> {
    let mut results = Vec::with_capacity(chunks.len());

    for (index, chunk) in chunks.iter().enumerate() {
        debug!(
            "{} chunk {}/{} ({} chars)",
            pipeline.name(),
            index + 1,
            chunks.len(),
            chunk.chars().count()
        );

        let output = pipeline.infer(chunk, operation).await.map_err(|e| {
            error!("{} failed on chunk {}/{}: {}", pipeline.name(), index + 1, chunks.len(), e);
            Error::Pipeline {
                pipeline: pipeline.name().to_string(),
                chunk: index,
                message: e.to_string(),
            }
        })?;
        results.push(output);
    }

    Ok(results)
}

/// Join per-chunk outputs with single spaces, preserving order.
pub fn combine(results: &[String]) -> String {
    results.join(" ")
}
