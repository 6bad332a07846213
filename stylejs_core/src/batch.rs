//! Directory-batch processing
//!
//! Scans a directory for dialect source files and compiles each candidate
//! independently: one fresh compilation unit (library + that single file) per
//! candidate, one engine context per candidate, no state carried between
//! iterations. A candidate that fails to read or compile is skipped and the
//! batch continues; the tally reports how many candidates were found and how
//! many produced output.

use crate::config::compile_time::batch_processing::MAX_FILES_PER_BATCH;
use crate::config::runtime::SourcePreferences;
use crate::logging::{self, codes};
use crate::pipeline;
use crate::resources::{ModuleOverrides, Toolchain};
use crate::sources;
use crate::{log_debug, log_info, log_success, log_warning};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// BATCH TYPES
// ============================================================================

/// Counts of candidates discovered vs. successfully compiled and written
///
/// Accumulated monotonically during one batch run, reported once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTally {
    found: usize,
    processed: usize,
}

impl BatchTally {
    pub fn new(found: usize) -> Self {
        Self {
            found,
            processed: 0,
        }
    }

    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    pub fn found(&self) -> usize {
        self.found
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn summary(&self) -> String {
        format!("Found {} files, {} processed.", self.found, self.processed)
    }
}

/// Batch processing errors
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No eligible source files found in directory: {path}")]
    NoFilesFound { path: String },

    #[error("Too many files found: {count} (max: {max})")]
    TooManyFiles { count: usize, max: usize },

    #[error("I/O error during directory scan: {error}")]
    IoError { error: String },
}

impl BatchError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            BatchError::DirectoryNotFound { .. } => codes::batch::DIRECTORY_NOT_FOUND,
            BatchError::NoFilesFound { .. } => codes::batch::NO_FILES_FOUND,
            BatchError::TooManyFiles { .. } => codes::batch::TOO_MANY_FILES,
            BatchError::IoError { .. } => codes::batch::SCAN_IO_ERROR,
        }
    }
}

// ============================================================================
// DIRECTORY SCANNER
// ============================================================================

/// Discover candidate files: every plain-file entry whose name ends with the
/// dialect source suffix. Sorted for deterministic processing order.
pub fn scan_directory(dir_path: &Path, source_suffix: &str) -> Result<Vec<PathBuf>, BatchError> {
    log_info!("Starting directory scan",
        "directory" => dir_path.display(),
        "suffix" => source_suffix);

    if !dir_path.is_dir() {
        return Err(BatchError::DirectoryNotFound {
            path: dir_path.display().to_string(),
        });
    }

    let entries = fs::read_dir(dir_path).map_err(|e| BatchError::IoError {
        error: e.to_string(),
    })?;

    let mut candidates = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| BatchError::IoError {
            error: e.to_string(),
        })?;

        let path = entry.path();

        if is_candidate(&path, source_suffix) {
            candidates.push(path);
        }
    }

    if candidates.is_empty() {
        return Err(BatchError::NoFilesFound {
            path: dir_path.display().to_string(),
        });
    }

    if candidates.len() > MAX_FILES_PER_BATCH {
        return Err(BatchError::TooManyFiles {
            count: candidates.len(),
            max: MAX_FILES_PER_BATCH,
        });
    }

    // Sort for deterministic processing order
    candidates.sort();

    log_debug!("Directory scan completed",
        "directory" => dir_path.display(),
        "candidates" => candidates.len());

    Ok(candidates)
}

fn is_candidate(path: &Path, source_suffix: &str) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(source_suffix) && n.len() > source_suffix.len())
            .unwrap_or(false)
}

// ============================================================================
// BATCH DISPATCHER
// ============================================================================

/// Process every candidate in `dir_path`: compile each against the active
/// library and write `<candidate><output_suffix>` beside it.
///
/// Failures are swallowed at the granularity of one candidate — the failed
/// file is excluded from the processed tally and the batch continues.
pub fn process_directory(
    toolchain: &Toolchain,
    overrides: &ModuleOverrides,
    dir_path: &Path,
) -> Result<BatchTally, BatchError> {
    let candidates = scan_directory(dir_path, toolchain.source_suffix)?;
    let prefs = SourcePreferences::default();

    let mut tally = BatchTally::new(candidates.len());

    for (file_id, candidate) in candidates.iter().enumerate() {
        let processed = logging::with_file_context(candidate.clone(), file_id, || {
            process_candidate(toolchain, overrides, candidate, &prefs)
        });

        if processed {
            tally.record_processed();
        }
    }

    log_success!(codes::success::BATCH_COMPLETED, "Directory batch completed",
        "directory" => dir_path.display(),
        "found" => tally.found(),
        "processed" => tally.processed());

    Ok(tally)
}

/// Compile one candidate and write its derived output file. Returns whether
/// the candidate counts as processed.
fn process_candidate(
    toolchain: &Toolchain,
    overrides: &ModuleOverrides,
    candidate: &Path,
    prefs: &SourcePreferences,
) -> bool {
    let source = match sources::read_source(candidate, toolchain.source_suffix, prefs) {
        Ok(source) => source,
        Err(error) => {
            log_warning!("Skipping unreadable candidate",
                "path" => candidate.display(),
                "error" => error);
            return false;
        }
    };

    // One fresh compilation unit per candidate: library + this file only
    let css = match pipeline::compile_sources(toolchain, overrides, std::slice::from_ref(&source)) {
        Ok(css) => css,
        Err(error) => {
            log_warning!("Skipping failed candidate",
                "path" => candidate.display(),
                "error" => error);
            return false;
        }
    };

    let output_path = toolchain.derived_output_path(candidate);

    match fs::write(&output_path, &css) {
        Ok(()) => {
            log_success!(codes::success::FILE_WRITTEN, "Candidate compiled",
                "input" => candidate.display(),
                "output" => output_path.display(),
                "css_bytes" => css.len());
            true
        }
        Err(error) => {
            log_warning!("Failed to write derived output",
                "path" => output_path.display(),
                "error" => error);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ModuleSpec;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    const FIXTURE_LIBRARY: &str = "var rules = [];\n\
        function rule(selector, body) { rules.push(selector + ' { ' + body + ' }'); }\n\
        function toCSS() { return rules.join('\\n'); }";

    const TEST_MODULES: &[ModuleSpec] = &[ModuleSpec {
        name: "Style",
        flag: 's',
        bundled: FIXTURE_LIBRARY,
    }];

    const TEST_TOOLCHAIN: Toolchain = Toolchain {
        name: "stylec",
        about: "test toolchain",
        dialect: "Style.js",
        library_version: "0.0.1",
        tool_version: "0.1.0",
        source_suffix: ".style",
        output_suffix: ".css",
        invocation: "toCSS();",
        modules: TEST_MODULES,
    };

    #[test]
    fn test_scan_finds_only_suffix_matches() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.style"), "rule('a', 'margin: 0');").unwrap();
        fs::write(dir.path().join("b.style"), "rule('b', 'margin: 0');").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a style file").unwrap();

        let candidates = scan_directory(dir.path(), ".style").unwrap();

        assert_eq!(candidates.len(), 2);
        assert!(candidates
            .iter()
            .all(|c| c.to_str().unwrap().ends_with(".style")));
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_directory(Path::new("/nonexistent/dir"), ".style");
        assert_matches!(result, Err(BatchError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_scan_empty_directory_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "nothing eligible").unwrap();

        let result = scan_directory(dir.path(), ".style");
        assert_matches!(result, Err(BatchError::NoFilesFound { .. }));
    }

    #[test]
    fn test_batch_tally_summary() {
        let mut tally = BatchTally::new(3);
        tally.record_processed();

        assert_eq!(tally.found(), 3);
        assert_eq!(tally.processed(), 1);
        assert_eq!(tally.summary(), "Found 3 files, 1 processed.");
    }

    #[test]
    fn test_batch_with_one_failing_candidate() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.style"), "rule('body', 'color: red');").unwrap();
        fs::write(dir.path().join("bad.style"), "rule(;").unwrap();

        let overrides = ModuleOverrides::new();
        let tally = process_directory(&TEST_TOOLCHAIN, &overrides, dir.path()).unwrap();

        assert_eq!(tally.found(), 2);
        assert_eq!(tally.processed(), 1);
        assert_eq!(tally.summary(), "Found 2 files, 1 processed.");

        // Exactly one derived output exists
        assert!(dir.path().join("good.style.css").exists());
        assert!(!dir.path().join("bad.style.css").exists());

        let css = fs::read_to_string(dir.path().join("good.style.css")).unwrap();
        assert_eq!(css, "body { color: red }");
    }

    #[test]
    fn test_batch_all_candidates_failing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.style"), "rule(;").unwrap();
        fs::write(dir.path().join("two.style"), "also broken(").unwrap();

        let overrides = ModuleOverrides::new();
        let tally = process_directory(&TEST_TOOLCHAIN, &overrides, dir.path()).unwrap();

        assert_eq!(tally.found(), 2);
        assert_eq!(tally.processed(), 0);
    }

    #[test]
    fn test_no_state_carries_over_between_candidates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("first.style"), "rule('a', 'margin: 0');").unwrap();
        fs::write(dir.path().join("second.style"), "rule('b', 'padding: 0');").unwrap();

        let overrides = ModuleOverrides::new();
        let tally = process_directory(&TEST_TOOLCHAIN, &overrides, dir.path()).unwrap();
        assert_eq!(tally.processed(), 2);

        // Each candidate compiles against a fresh library: the second output
        // must not contain the first candidate's rule
        let second = fs::read_to_string(dir.path().join("second.style.css")).unwrap();
        assert_eq!(second, "b { padding: 0 }");

        let first = fs::read_to_string(dir.path().join("first.style.css")).unwrap();
        assert_eq!(first, "a { margin: 0 }");
    }

    #[test]
    fn test_derived_output_truncates_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.style"), "rule('p', 'margin: 0');").unwrap();
        fs::write(dir.path().join("page.style.css"), "stale output that is much longer").unwrap();

        let overrides = ModuleOverrides::new();
        process_directory(&TEST_TOOLCHAIN, &overrides, dir.path()).unwrap();

        let css = fs::read_to_string(dir.path().join("page.style.css")).unwrap();
        assert_eq!(css, "p { margin: 0 }");
    }
}
