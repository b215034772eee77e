use clap::Parser;
use std::path::PathBuf;

/// Default report file name
pub const DEFAULT_REPORT_FILENAME: &str = "ConsolidatedResults.xlsx";

#[derive(Parser, Debug, Clone)]
#[command(name = "consolidate")]
#[command(about = "Consolidates the results of the static analysis experiments into a single spreadsheet")]
#[command(version)]
pub struct CliArgs {
    /// The folder where the results are held (<app>/<tool>/<result-file>)
    #[arg(value_name = "RESULTS_FOLDER")]
    pub results_folder: PathBuf,

    /// The filename of the resulting report; .xlsx, .json and .md are supported
    #[arg(long, short = 'f', default_value = DEFAULT_REPORT_FILENAME)]
    pub filename: PathBuf,

    /// Send progress info to the output (debug-level logging)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Also print the consolidated table to the console
    #[arg(long)]
    pub print_table: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "manifest-components")]
#[command(about = "Lists the components declared in an AndroidManifest.xml")]
#[command(version)]
pub struct ManifestArgs {
    /// The manifest to read
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Where to write the component listing
    #[arg(long, short = 'o', default_value = crate::manifest::COMPONENTS_FILE)]
    pub output: PathBuf,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
