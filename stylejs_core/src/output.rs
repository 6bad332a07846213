//! Aggregate output dispatch
//!
//! The output target is decided from CLI flags before any compilation and is
//! immutable for the run. A named output file is opened (created, truncated)
//! during argument validation — after override files have been vetted — and
//! the handle is written once and closed on every exit path by drop.

use crate::logging::codes;
use crate::log_success;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Output dispatch errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("The CSS output file isn't writable: {path}")]
    NotWritable { path: String, error: String },

    #[error("Failed to write CSS output to {path}: {error}")]
    WriteFailed { path: String, error: String },
}

impl OutputError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            OutputError::NotWritable { .. } => codes::output::OUTPUT_NOT_WRITABLE,
            OutputError::WriteFailed { .. } => codes::output::WRITE_FAILED,
        }
    }
}

/// Where the aggregate result goes
#[derive(Debug)]
pub enum OutputTarget {
    /// Print the CSS to the console
    Stdout,
    /// Write the CSS to a named file; optionally echo it to the console too
    File {
        path: PathBuf,
        file: File,
        print_also: bool,
    },
}

impl OutputTarget {
    /// Build the target from CLI flags. Opening the named file (create +
    /// truncate) happens here, so an unopenable path aborts the run before
    /// any compilation.
    pub fn from_options(output_path: Option<PathBuf>, print_also: bool) -> Result<Self, OutputError> {
        match output_path {
            None => Ok(OutputTarget::Stdout),
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&path)
                    .map_err(|e| OutputError::NotWritable {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;

                Ok(OutputTarget::File {
                    path,
                    file,
                    print_also,
                })
            }
        }
    }

    /// Deliver the compiled CSS: print it, or write it to the named file and
    /// either echo it or print a one-line byte-count summary.
    pub fn deliver(self, css: &str) -> Result<(), OutputError> {
        match self {
            OutputTarget::Stdout => {
                println!("{}", css);
            }
            OutputTarget::File {
                path,
                mut file,
                print_also,
            } => {
                file.write_all(css.as_bytes())
                    .map_err(|e| OutputError::WriteFailed {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;

                log_success!(codes::success::FILE_WRITTEN, "Aggregate output written",
                    "path" => path.display(),
                    "css_bytes" => css.len());

                if print_also {
                    println!("{}", css);
                } else {
                    println!("CSS output ({} bytes) saved to: {}", css.len(), path.display());
                }
            }
        }

        Ok(())
    }
}
