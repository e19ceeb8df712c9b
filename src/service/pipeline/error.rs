//! Error types for the case pipeline

use thiserror::Error;

/// Errors surfaced to callers of the pipeline.
///
/// Provider failures are not listed: they are recovered inside the pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("Invalid case description: {0}")]
    InvalidInput(String),

    #[error("Case processing failed: {0}")]
    Internal(String),
}
