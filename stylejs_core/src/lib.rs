// Internal modules
pub mod assembler;
pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
#[macro_use]
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod resources;
pub mod sources;

// Re-export key types for library consumers
pub use batch::{BatchError, BatchTally};
pub use cli::{CliError, RunOptions};
pub use engine::EngineError;
pub use pipeline::PipelineError;
pub use resources::{ModuleOverrides, ModuleSpec, Toolchain};
pub use sources::{SourceError, SourceFile};
