use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for a pipeline run. Every variant is fatal: nothing is
/// retried and no partial result is returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("audio file not found: {0}")]
    MissingInput(PathBuf),

    #[error("failed to load speech model: {0:#}")]
    ModelLoad(anyhow::Error),

    #[error("speech inference failed: {0:#}")]
    Inference(anyhow::Error),

    #[error("text normalization failed: {0:#}")]
    Generation(anyhow::Error),

    #[error("failed to persist result: {0:#}")]
    Persistence(anyhow::Error),
}
