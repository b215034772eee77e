/// Configuration resolution module
///
/// This module handles:
/// - Building a ConsolidateConfig from CLI arguments
/// - Validating the results folder and resolving the report path
/// - Choosing the report format and log level
use crate::cli::CliArgs;
use crate::error::{ConsolidateError, Result};
use crate::report::ReportFormat;
use log::{LevelFilter, debug};
use std::env;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one consolidation run
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidateConfig {
    pub results_root: PathBuf,
    pub output_path: PathBuf,
    pub format: ReportFormat,
    pub log_level: LevelFilter,
    pub print_table: bool,
}

/// Build a ConsolidateConfig from CLI arguments, relative to the current directory
pub fn build_config(args: &CliArgs) -> Result<ConsolidateConfig> {
    let cwd = env::current_dir().map_err(|e| ConsolidateError::io(".", e))?;
    build_config_in(args, &cwd)
}

/// Build a ConsolidateConfig, resolving a relative report path against `cwd`
pub fn build_config_in(args: &CliArgs, cwd: &Path) -> Result<ConsolidateConfig> {
    if !args.results_folder.is_dir() {
        return Err(ConsolidateError::NotFound {
            path: args.results_folder.clone(),
        });
    }

    let output_path = cwd.join(&args.filename);
    let format = ReportFormat::from_path(&output_path).ok_or_else(|| {
        ConsolidateError::Report(format!(
            "Unsupported report format '{}': use .xlsx, .json or .md",
            output_path.display()
        ))
    })?;

    debug!("Report {:?} will be written as {:?}", output_path, format);

    Ok(ConsolidateConfig {
        results_root: args.results_folder.clone(),
        output_path,
        format,
        log_level: log_level(args.verbose),
        print_table: args.print_table,
    })
}

/// Debug when verbose, errors only otherwise
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Error }
}

/// Initialise env_logger at `level`; RUST_LOG still takes precedence
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new().filter_level(level).parse_default_env().try_init();
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
