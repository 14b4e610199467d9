pub mod analysis;
pub mod chunker;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod registry;
pub mod router;
pub mod types;

pub use chunker::TextChunker;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use processor::{combine, process_chunks};
pub use registry::PipelineRegistry;
pub use router::route;
pub use types::{
    ChunkSettings, LanguagePair, Operation, OperationKind, PipelineKind, SummaryLength,
};
