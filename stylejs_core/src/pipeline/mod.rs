//! Compilation pipeline: assemble the program text, execute it, surface the
//! CSS result
//!
//! One invocation covers one compilation unit — all aggregate inputs at once,
//! or a single candidate file in directory-batch mode. Nothing is retained
//! between invocations.

mod error;

pub use error::PipelineError;

use crate::resources::{self, ModuleOverrides, Toolchain};
use crate::sources::SourceFile;
use crate::{assembler, engine, log_success};
use crate::logging::codes;

/// Compile raw text fragments: library texts + input texts + invocation.
pub fn compile(
    library_texts: &[&str],
    input_texts: &[&str],
    invocation: &str,
) -> Result<String, PipelineError> {
    if input_texts.is_empty() {
        return Err(PipelineError::pipeline_error(
            "no input fragments to compile",
        ));
    }

    let program = assembler::assemble(library_texts, input_texts, invocation);
    let css = engine::execute(&program)?;

    log_success!(codes::success::COMPILATION_SUCCESS, "Compilation unit executed",
        "program_bytes" => program.len(),
        "css_bytes" => css.len());

    Ok(css)
}

/// Compile loaded source files against a toolchain's active library.
pub fn compile_sources(
    toolchain: &Toolchain,
    overrides: &ModuleOverrides,
    inputs: &[SourceFile],
) -> Result<String, PipelineError> {
    let library_texts = resources::library_texts(toolchain, overrides);
    let input_texts: Vec<&str> = inputs.iter().map(|s| s.text.as_str()).collect();

    compile(&library_texts, &input_texts, toolchain.invocation)
}
