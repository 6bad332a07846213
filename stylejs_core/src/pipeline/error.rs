use crate::engine::EngineError;
use crate::sources::SourceError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source reading failed: {0}")]
    Source(#[from] SourceError),

    #[error("Engine execution failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Check if this error is recoverable within a batch (a failed candidate
    /// is skipped; the batch continues)
    pub fn is_recoverable(&self) -> bool {
        match self {
            PipelineError::Source(e) => e.is_recoverable(),
            PipelineError::Engine(e) => e.is_recoverable(),
            PipelineError::Pipeline { .. } => false,
        }
    }
}
