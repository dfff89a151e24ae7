// Application layer - use case orchestration

pub mod pipeline;

pub use pipeline::{HighlightInteractor, PipelineOutcome, PipelineRequest};
