//! Bundled library resources and per-run override selection
//!
//! Each toolchain generation (stylec, jssc) describes itself with a
//! [`Toolchain`] value: the dialect library modules it embeds, their fixed
//! emission order, the source/output suffixes, and the invocation statement
//! appended to every assembled program. Bundled module texts are compiled-in
//! constants; replacing one for a single run goes through [`ModuleOverrides`],
//! never through ambient mutable state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One named unit of bundled dialect source
#[derive(Debug, Clone, Copy)]
pub struct ModuleSpec {
    /// Module identity, e.g. "Type", "Util", "Style", "JSS"
    pub name: &'static str,
    /// CLI flag character that overrides this module for a run
    pub flag: char,
    /// Bundled default text, fixed at build time
    pub bundled: &'static str,
}

/// Per-generation toolchain descriptor
///
/// `modules` is ordered: earlier-dependency modules come first, mirroring the
/// dialect's lack of forward declarations.
#[derive(Debug, Clone, Copy)]
pub struct Toolchain {
    pub name: &'static str,
    pub about: &'static str,
    /// Display name of the embedded dialect library, e.g. "Style.js"
    pub dialect: &'static str,
    pub library_version: &'static str,
    pub tool_version: &'static str,
    /// Suffix identifying dialect source files, e.g. ".style"
    pub source_suffix: &'static str,
    /// Suffix appended to derived batch output names, e.g. ".css"
    pub output_suffix: &'static str,
    /// Trailing statement that triggers the dialect's transformation
    pub invocation: &'static str,
    pub modules: &'static [ModuleSpec],
}

impl Toolchain {
    /// Look up a module by its override flag character
    pub fn module_by_flag(&self, flag: char) -> Option<&'static ModuleSpec> {
        self.modules.iter().find(|m| m.flag == flag)
    }

    /// Derived output path for a batch candidate: the candidate name with the
    /// output suffix appended, in the same directory
    pub fn derived_output_path(&self, candidate: &Path) -> PathBuf {
        let file_name = candidate
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        candidate.with_file_name(format!("{}{}", file_name, self.output_suffix))
    }
}

/// Per-run module override texts, keyed by module name
///
/// Built once by the CLI layer from override flags and passed down the
/// pipeline; discarded at process exit.
#[derive(Debug, Clone, Default)]
pub struct ModuleOverrides {
    texts: HashMap<&'static str, String>,
}

impl ModuleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, module: &'static str, text: String) {
        self.texts.insert(module, text);
    }

    pub fn get(&self, module: &str) -> Option<&str> {
        self.texts.get(module).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }
}

/// Active text for one module: the override verbatim when present, otherwise
/// the bundled default. Pure lookup; never fails.
pub fn module_text<'a>(spec: &'a ModuleSpec, overrides: &'a ModuleOverrides) -> &'a str {
    overrides.get(spec.name).unwrap_or(spec.bundled)
}

/// Active library texts in the toolchain's fixed module order
pub fn library_texts<'a>(toolchain: &'a Toolchain, overrides: &'a ModuleOverrides) -> Vec<&'a str> {
    toolchain
        .modules
        .iter()
        .map(|spec| module_text(spec, overrides))
        .collect()
}
