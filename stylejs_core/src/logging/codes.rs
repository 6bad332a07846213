//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and the
//! classification helpers used by the logging macros and error types.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source reading error codes
pub mod sources {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E101");
    pub const INVALID_PATH: Code = Code::new("E102");
    pub const FILE_TOO_LARGE: Code = Code::new("E103");
    pub const EMPTY_FILE: Code = Code::new("E104");
    pub const INVALID_ENCODING: Code = Code::new("E105");
    pub const IO_ERROR: Code = Code::new("E106");
    pub const PERMISSION_DENIED: Code = Code::new("E107");
}

/// Execution engine error codes
pub mod engine {
    use super::Code;

    pub const EVALUATION_FAILED: Code = Code::new("E201");
    pub const RESULT_CONVERSION_FAILED: Code = Code::new("E202");
    pub const EMPTY_RESULT: Code = Code::new("E203");
    pub const PROGRAM_TOO_LARGE: Code = Code::new("E204");
}

/// Directory batch error codes
pub mod batch {
    use super::Code;

    pub const DIRECTORY_NOT_FOUND: Code = Code::new("E301");
    pub const NO_FILES_FOUND: Code = Code::new("E302");
    pub const TOO_MANY_FILES: Code = Code::new("E303");
    pub const SCAN_IO_ERROR: Code = Code::new("E304");
}

/// Output dispatch error codes
pub mod output {
    use super::Code;

    pub const OUTPUT_NOT_WRITABLE: Code = Code::new("E401");
    pub const WRITE_FAILED: Code = Code::new("E402");
}

/// Argument parsing error codes
pub mod cli {
    use super::Code;

    pub const UNKNOWN_FLAG: Code = Code::new("E501");
    pub const MISSING_VALUE: Code = Code::new("E502");
    pub const EMPTY_OVERRIDE: Code = Code::new("E503");
    pub const NO_VALID_INPUTS: Code = Code::new("E504");
    pub const CONFLICTING_INPUTS: Code = Code::new("E505");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const COMPILATION_SUCCESS: Code = Code::new("I002");
    pub const FILE_WRITTEN: Code = Code::new("I003");
    pub const BATCH_COMPLETED: Code = Code::new("I004");
    pub const SOURCE_LOADED: Code = Code::new("I005");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal error in the compilation pipeline",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Global services failed to initialize",
            ),
            ErrorMetadata::new(
                "E101",
                "Sources",
                Severity::Medium,
                true,
                false,
                "Input file does not exist",
            ),
            ErrorMetadata::new(
                "E102",
                "Sources",
                Severity::Medium,
                true,
                false,
                "Input path is not a regular file",
            ),
            ErrorMetadata::new(
                "E103",
                "Sources",
                Severity::Medium,
                true,
                false,
                "Input file exceeds the compile-time size limit",
            ),
            ErrorMetadata::new(
                "E104",
                "Sources",
                Severity::Low,
                true,
                false,
                "Input file is empty",
            ),
            ErrorMetadata::new(
                "E105",
                "Sources",
                Severity::Medium,
                true,
                false,
                "Input file is not valid UTF-8",
            ),
            ErrorMetadata::new(
                "E106",
                "Sources",
                Severity::Medium,
                true,
                false,
                "I/O error while reading an input file",
            ),
            ErrorMetadata::new(
                "E107",
                "Sources",
                Severity::Medium,
                true,
                false,
                "Permission denied reading an input file",
            ),
            ErrorMetadata::new(
                "E201",
                "Engine",
                Severity::Medium,
                true,
                false,
                "Program compilation or evaluation raised an engine error",
            ),
            ErrorMetadata::new(
                "E202",
                "Engine",
                Severity::Medium,
                true,
                false,
                "Engine result could not be converted to text",
            ),
            ErrorMetadata::new(
                "E203",
                "Engine",
                Severity::Low,
                true,
                false,
                "Program evaluated to an empty result",
            ),
            ErrorMetadata::new(
                "E204",
                "Engine",
                Severity::High,
                false,
                true,
                "Assembled program exceeds the compile-time size ceiling",
            ),
            ErrorMetadata::new(
                "E301",
                "Batch",
                Severity::High,
                false,
                true,
                "Batch directory cannot be opened",
            ),
            ErrorMetadata::new(
                "E302",
                "Batch",
                Severity::High,
                false,
                true,
                "Batch directory contains no eligible source files",
            ),
            ErrorMetadata::new(
                "E303",
                "Batch",
                Severity::High,
                false,
                true,
                "Batch directory exceeds the per-batch file limit",
            ),
            ErrorMetadata::new(
                "E304",
                "Batch",
                Severity::Medium,
                false,
                true,
                "I/O error while scanning the batch directory",
            ),
            ErrorMetadata::new(
                "E401",
                "Output",
                Severity::High,
                false,
                true,
                "Requested output file cannot be opened for writing",
            ),
            ErrorMetadata::new(
                "E402",
                "Output",
                Severity::High,
                false,
                true,
                "Writing the compiled CSS to disk failed",
            ),
            ErrorMetadata::new(
                "E501",
                "Cli",
                Severity::Medium,
                false,
                true,
                "Unknown command-line flag",
            ),
            ErrorMetadata::new(
                "E502",
                "Cli",
                Severity::Medium,
                false,
                true,
                "Command-line flag is missing its value",
            ),
            ErrorMetadata::new(
                "E503",
                "Cli",
                Severity::High,
                false,
                true,
                "Module override file is empty",
            ),
            ErrorMetadata::new(
                "E504",
                "Cli",
                Severity::Medium,
                false,
                true,
                "No valid input files were found to transform",
            ),
            ErrorMetadata::new(
                "E505",
                "Cli",
                Severity::Medium,
                false,
                true,
                "Explicit input files conflict with directory-batch mode",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get severity for an error code (unknown codes default to Medium)
pub fn get_severity(code: &str) -> Severity {
    registry()
        .get(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

/// Get category for an error code
pub fn get_category(code: &str) -> &'static str {
    registry().get(code).map(|m| m.category).unwrap_or("Unknown")
}

/// Get description for an error code
pub fn get_description(code: &str) -> &'static str {
    registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Check whether an error code should halt the current run
pub fn requires_halt(code: &str) -> bool {
    registry().get(code).map(|m| m.requires_halt).unwrap_or(false)
}

/// Check whether an error code is recoverable within a batch
pub fn is_recoverable(code: &str) -> bool {
    registry().get(code).map(|m| m.recoverable).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        let code = sources::FILE_NOT_FOUND;
        assert_eq!(code.as_str(), "E101");
        assert_eq!(format!("{}", code), "E101");
    }

    #[test]
    fn test_engine_errors_are_recoverable() {
        // Engine failures are swallowed per candidate in directory-batch mode
        assert!(is_recoverable(engine::EVALUATION_FAILED.as_str()));
        assert!(is_recoverable(engine::EMPTY_RESULT.as_str()));
        assert!(!requires_halt(engine::EVALUATION_FAILED.as_str()));
    }

    #[test]
    fn test_argument_errors_halt() {
        assert!(requires_halt(cli::EMPTY_OVERRIDE.as_str()));
        assert!(requires_halt(output::OUTPUT_NOT_WRITABLE.as_str()));
        assert!(requires_halt(batch::NO_FILES_FOUND.as_str()));
        assert!(!is_recoverable(cli::EMPTY_OVERRIDE.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_severity("E999"), Severity::Medium);
        assert!(!requires_halt("E999"));
    }

    #[test]
    fn test_registry_metadata() {
        assert_eq!(get_category("E301"), "Batch");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("ERR001"));
    }
}
