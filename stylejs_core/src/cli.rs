//! Command-line surface shared by both toolchain generations
//!
//! Flag parsing is hand-rolled over `env::args`; everything the flags decide
//! travels in a [`RunOptions`] value built once per run. Validation order is
//! deliberate: override files are read (and empty ones abort the run) before
//! the output file is created or truncated, and the output file is opened
//! before any compilation starts.
//!
//! The tool never uses a failure exit status: every path returns to `main`
//! normally and errors are console text only.

use crate::batch;
use crate::config::runtime::SourcePreferences;
use crate::engine;
use crate::log_warning;
use crate::logging;
use crate::output::OutputTarget;
use crate::pipeline;
use crate::resources::{ModuleOverrides, Toolchain};
use crate::sources::{self, SourceFile};
use std::fs;
use std::path::PathBuf;

/// Everything the command line decided, fixed for the run
#[derive(Debug, Default)]
pub struct RunOptions {
    pub inputs: Vec<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub directory: Option<PathBuf>,
    pub print_output: bool,
    pub show_version: bool,
    pub show_help: bool,
    /// Module name -> override file path, in flag order
    pub override_paths: Vec<(&'static str, PathBuf)>,
}

/// Argument errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Unknown option '{flag}'")]
    UnknownFlag { flag: String },

    #[error("Option '{flag}' requires a value")]
    MissingValue { flag: String },

    #[error("Empty external {module}.js file supplied: {path}")]
    EmptyOverride { module: &'static str, path: String },

    #[error("Cannot read external {module}.js file {path}: {error}")]
    UnreadableOverride {
        module: &'static str,
        path: String,
        error: String,
    },

    #[error("Explicit input files cannot be combined with a batch directory")]
    ConflictingInputs,
}

/// Entry point used by both binaries
pub fn run(toolchain: &Toolchain) {
    if !logging::is_initialized() {
        let _ = logging::init_global_logging();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(toolchain, &args);
}

/// Run against an explicit argument list (separated out for testing)
pub fn run_with_args(toolchain: &Toolchain, args: &[String]) {
    if args.is_empty() {
        eprintln!("Please provide at least one file to compile to CSS.");
        return;
    }

    let options = match parse_options(toolchain, args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };

    if options.show_help {
        print!("{}", usage_text(toolchain));
        return;
    }

    if options.show_version {
        println!("{}", version_table(toolchain));
        return;
    }

    if options.directory.is_some() && !options.inputs.is_empty() {
        eprintln!("{}", CliError::ConflictingInputs);
        return;
    }

    // Override files are vetted before the output file is touched
    let overrides = match load_overrides(&options.override_paths) {
        Ok(overrides) => overrides,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };

    if let Some(dir) = &options.directory {
        match batch::process_directory(toolchain, &overrides, dir) {
            Ok(tally) => println!("{}", tally.summary()),
            Err(error) => eprintln!("{}", error),
        }
        return;
    }

    run_aggregate(toolchain, &overrides, options);
}

/// Aggregate mode: one compilation unit over all listed inputs combined
fn run_aggregate(toolchain: &Toolchain, overrides: &ModuleOverrides, options: RunOptions) {
    let prefs = SourcePreferences::default();

    let mut inputs: Vec<SourceFile> = Vec::new();
    for path in &options.inputs {
        match sources::read_source(path, toolchain.source_suffix, &prefs) {
            Ok(source) => inputs.push(source),
            Err(error) => {
                log_warning!("Skipping input file",
                    "path" => path.display(),
                    "error" => error);
            }
        }
    }

    if inputs.is_empty() {
        eprintln!("No valid files were found to transform!");
        return;
    }

    let target = match OutputTarget::from_options(options.output_path, options.print_output) {
        Ok(target) => target,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };

    let css = match pipeline::compile_sources(toolchain, overrides, &inputs) {
        Ok(css) => css,
        Err(error) => {
            eprintln!("Compilation failed: {}", error);
            return;
        }
    };

    if let Err(error) = target.deliver(&css) {
        eprintln!("{}", error);
    }
}

/// Parse the argument list into [`RunOptions`]
pub fn parse_options(toolchain: &Toolchain, args: &[String]) -> Result<RunOptions, CliError> {
    let mut options = RunOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        let flag = match short_flag(arg) {
            Some(flag) => flag,
            None => {
                options.inputs.push(PathBuf::from(arg));
                i += 1;
                continue;
            }
        };

        match flag {
            'o' => {
                let value = flag_value(args, i, arg)?;
                options.output_path = Some(PathBuf::from(value));
                i += 1;
            }
            'd' => {
                let value = flag_value(args, i, arg)?;
                options.directory = Some(PathBuf::from(value));
                i += 1;
            }
            'p' => options.print_output = true,
            'v' => options.show_version = true,
            'h' => options.show_help = true,
            other => match toolchain.module_by_flag(other) {
                Some(module) => {
                    let value = flag_value(args, i, arg)?;
                    options
                        .override_paths
                        .push((module.name, PathBuf::from(value)));
                    i += 1;
                }
                None => {
                    return Err(CliError::UnknownFlag { flag: arg.clone() });
                }
            },
        }

        i += 1;
    }

    Ok(options)
}

fn short_flag(arg: &str) -> Option<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(flag), None) if flag != '-' => Some(flag),
        _ => None,
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| CliError::MissingValue {
            flag: flag.to_string(),
        })
}

/// Read every override file; an empty override aborts the run before any
/// compilation and before the output file is created.
pub fn load_overrides(
    override_paths: &[(&'static str, PathBuf)],
) -> Result<ModuleOverrides, CliError> {
    let mut overrides = ModuleOverrides::new();

    for &(module, ref path) in override_paths {
        let text = fs::read_to_string(path).map_err(|e| CliError::UnreadableOverride {
            module,
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(CliError::EmptyOverride {
                module,
                path: path.display().to_string(),
            });
        }

        overrides.set(module, text);
    }

    Ok(overrides)
}

/// Usage text for `-h`
pub fn usage_text(toolchain: &Toolchain) -> String {
    let mut text = format!(
        "{} v{} - {}\nUsage: {} [options] file...\nOptions:\n",
        toolchain.name, toolchain.tool_version, toolchain.about, toolchain.name
    );

    for module in toolchain.modules {
        text.push_str(&format!(
            "  -{} <file>                Override embedded {}.js with the contents of <file>\n",
            module.flag, module.name
        ));
    }

    text.push_str("  -o <file>                Place CSS output into <file>\n");
    text.push_str(&format!(
        "  -d <directory>           Compile every *{} file in <directory>\n",
        toolchain.source_suffix
    ));
    text.push_str("  -p                       Print CSS output to screen\n");
    text.push_str("  -v                       Display component versions\n");
    text.push_str("  -h                       Display this help text\n");

    text
}

/// Component version table for `-v`
pub fn version_table(toolchain: &Toolchain) -> String {
    format!(
        "-------------------\n\
         Component | Version\n\
         -------------------\n\
         {:<10}| {}\n\
         {:<10}| {}\n\
         {:<10}| {}",
        toolchain.dialect,
        toolchain.library_version,
        toolchain.name,
        toolchain.tool_version,
        engine::ENGINE_NAME,
        engine::ENGINE_VERSION
    )
}
