//! Input source reading with compile-time limits and logging integration

use crate::config::compile_time::sources::{LARGE_FILE_THRESHOLD, MAX_FILE_SIZE};
use crate::config::runtime::SourcePreferences;
use crate::logging::codes;
use crate::{log_debug, log_error};
use std::fs;
use std::path::{Path, PathBuf};

/// Source reading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },
}

impl SourceError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SourceError::FileNotFound { .. } => codes::sources::FILE_NOT_FOUND,
            SourceError::InvalidPath { .. } => codes::sources::INVALID_PATH,
            SourceError::FileTooLarge { .. } => codes::sources::FILE_TOO_LARGE,
            SourceError::EmptyFile => codes::sources::EMPTY_FILE,
            SourceError::InvalidEncoding { .. } => codes::sources::INVALID_ENCODING,
            SourceError::PermissionDenied { .. } => codes::sources::PERMISSION_DENIED,
            SourceError::IoError { .. } => codes::sources::IO_ERROR,
        }
    }

    /// Check if this error is recoverable within a batch
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

/// One loaded input file
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub size: u64,
    pub line_count: usize,
    /// Whether the file name carries the toolchain's dialect suffix
    pub is_dialect_source: bool,
}

impl SourceFile {
    /// Check if file is empty content-wise (only whitespace)
    pub fn is_effectively_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// Read and validate one input file.
///
/// `source_suffix` is the toolchain's dialect suffix, used only to classify
/// the file; unless [`SourcePreferences::require_dialect_suffix`] is set,
/// explicitly listed inputs of any name are accepted.
pub fn read_source(
    path: &Path,
    source_suffix: &str,
    prefs: &SourcePreferences,
) -> Result<SourceFile, SourceError> {
    let display_path = path.display().to_string();

    if !path.exists() {
        let error = SourceError::FileNotFound {
            path: display_path.clone(),
        };
        log_error!(error.error_code(), "File not found", "path" => display_path);
        return Err(error);
    }

    if !path.is_file() {
        let error = SourceError::InvalidPath {
            path: display_path.clone(),
        };
        log_error!(error.error_code(), "Path is not a file", "path" => display_path);
        return Err(error);
    }

    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
    let size = metadata.len();

    if size > MAX_FILE_SIZE {
        let error = SourceError::FileTooLarge {
            size,
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "File exceeds maximum size limit",
            "path" => display_path,
            "size_bytes" => size,
            "limit_bytes" => MAX_FILE_SIZE);
        return Err(error);
    }

    let is_dialect_source = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(source_suffix))
        .unwrap_or(false);

    if prefs.require_dialect_suffix && !is_dialect_source {
        let error = SourceError::InvalidPath {
            path: display_path.clone(),
        };
        log_error!(error.error_code(), "File does not carry the dialect suffix",
            "path" => display_path,
            "required_suffix" => source_suffix);
        return Err(error);
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            let error = match e.kind() {
                std::io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
                    path: display_path.clone(),
                },
                std::io::ErrorKind::InvalidData => SourceError::InvalidEncoding {
                    path: display_path.clone(),
                },
                _ => io_error(path, e),
            };
            log_error!(error.error_code(), "Failed to read file", "path" => display_path);
            return Err(error);
        }
    };

    if text.trim().is_empty() {
        let error = SourceError::EmptyFile;
        log_error!(error.error_code(), "File is empty", "path" => display_path);
        return Err(error);
    }

    let line_count = text.lines().count();

    if !is_dialect_source && prefs.log_foreign_sources {
        log_debug!("Loaded source without dialect suffix",
            "path" => display_path,
            "expected_suffix" => source_suffix);
    }

    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
        size,
        line_count,
        is_dialect_source,
    })
}

fn io_error(path: &Path, e: std::io::Error) -> SourceError {
    SourceError::IoError {
        message: format!("Failed to read '{}': {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_source() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.style");
        fs::write(&file_path, "Style({body: {color: 'red'}});\n").unwrap();

        let prefs = SourcePreferences::default();
        let source = read_source(&file_path, ".style", &prefs).unwrap();

        assert_eq!(source.line_count, 1);
        assert!(source.is_dialect_source);
        assert!(!source.is_effectively_empty());
        assert!(!source.is_large_file());
        assert!(source.text.contains("color: 'red'"));
    }

    #[test]
    fn test_file_not_found() {
        let prefs = SourcePreferences::default();
        let result = read_source(Path::new("nonexistent.style"), ".style", &prefs);

        assert_matches!(result, Err(SourceError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.style");
        fs::write(&file_path, "  \n\t\n").unwrap();

        let prefs = SourcePreferences::default();
        let result = read_source(&file_path, ".style", &prefs);

        assert_matches!(result, Err(SourceError::EmptyFile));
    }

    #[test]
    fn test_foreign_suffix_accepted_by_default() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.txt");
        fs::write(&file_path, "content();").unwrap();

        let prefs = SourcePreferences::default();
        let source = read_source(&file_path, ".style", &prefs).unwrap();

        assert!(!source.is_dialect_source);
    }

    #[test]
    fn test_foreign_suffix_rejected_when_required() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.txt");
        fs::write(&file_path, "content();").unwrap();

        let prefs = SourcePreferences {
            require_dialect_suffix: true,
            log_foreign_sources: false,
        };
        let result = read_source(&file_path, ".style", &prefs);

        assert_matches!(result, Err(SourceError::InvalidPath { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();

        let prefs = SourcePreferences::default();
        let result = read_source(dir.path(), ".style", &prefs);

        assert_matches!(result, Err(SourceError::InvalidPath { .. }));
    }

    #[test]
    fn test_error_codes() {
        let error = SourceError::FileNotFound {
            path: "missing.style".to_string(),
        };

        assert_eq!(error.error_code().as_str(), "E101");
        assert!(error.is_recoverable());
    }
}
