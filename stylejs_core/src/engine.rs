//! Execution engine adapter over the Boa JavaScript engine
//!
//! Each call acquires a fresh, isolated context, evaluates the assembled
//! program to completion, converts the completion value to text, and drops
//! every engine resource on the way out. Contexts are never reused across
//! calls: directory-batch mode relies on a clean global environment per
//! candidate so that library state from one item cannot leak into the next.

use crate::config::compile_time::engine::MAX_PROGRAM_BYTES;
use crate::logging::codes;
use crate::{log_debug, log_error};
use boa_engine::{Context, Source};

/// Engine identity for the version table
pub const ENGINE_NAME: &str = "Boa";

// Keep in sync with the boa_engine entry in the workspace Cargo.toml
pub const ENGINE_VERSION: &str = "0.20";

/// Execution engine errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("Script evaluation failed: {message}")]
    Evaluation { message: String },

    #[error("Result conversion failed: {message}")]
    Conversion { message: String },

    #[error("Program produced an empty result")]
    EmptyResult,

    #[error("Program too large: {size} bytes (max: {max_size})")]
    ProgramTooLarge { size: usize, max_size: usize },
}

impl EngineError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            EngineError::Evaluation { .. } => codes::engine::EVALUATION_FAILED,
            EngineError::Conversion { .. } => codes::engine::RESULT_CONVERSION_FAILED,
            EngineError::EmptyResult => codes::engine::EMPTY_RESULT,
            EngineError::ProgramTooLarge { .. } => codes::engine::PROGRAM_TOO_LARGE,
        }
    }

    /// Check if this error is recoverable within a batch
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

/// Compile and run `program` in a fresh engine context, returning the textual
/// completion value.
///
/// The result is either non-empty text or an explicit failure; an `undefined`
/// or empty completion value is reported as [`EngineError::EmptyResult`]
/// rather than surfaced as garbage output.
pub fn execute(program: &str) -> Result<String, EngineError> {
    if program.len() > MAX_PROGRAM_BYTES {
        let error = EngineError::ProgramTooLarge {
            size: program.len(),
            max_size: MAX_PROGRAM_BYTES,
        };
        log_error!(error.error_code(), "Assembled program exceeds size ceiling",
            "size_bytes" => program.len(),
            "limit_bytes" => MAX_PROGRAM_BYTES);
        return Err(error);
    }

    log_debug!("Acquiring engine context", "program_bytes" => program.len());

    // Fresh context per call; dropped on every exit path below
    let mut context = Context::default();

    let value = context
        .eval(Source::from_bytes(program))
        .map_err(|e| {
            let error = EngineError::Evaluation {
                message: e.to_string(),
            };
            log_error!(error.error_code(), "Script evaluation raised an engine error",
                "engine_error" => e);
            error
        })?;

    let text = value
        .to_string(&mut context)
        .map_err(|e| {
            let error = EngineError::Conversion {
                message: e.to_string(),
            };
            log_error!(error.error_code(), "Completion value could not be converted to text",
                "engine_error" => e);
            error
        })?
        .to_std_string_escaped();

    if text.is_empty() || text == "undefined" {
        return Err(EngineError::EmptyResult);
    }

    log_debug!("Engine context released", "result_bytes" => text.len());

    Ok(text)
}
