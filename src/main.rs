// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::info;
use result_consolidator::config::{self, ConsolidateConfig};
use result_consolidator::report::{self, ReportSheet};
use result_consolidator::{aggregate, cli, ui};

fn main() {
    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve configuration up front
    let config = match config::build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };
    config::init_logging(config.log_level);

    if let Err(e) = run(&config) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Aggregate the results tree and write the report
fn run(config: &ConsolidateConfig) -> result_consolidator::Result<()> {
    let aggregation = aggregate(&config.results_root)?;
    let sheet = ReportSheet::from_aggregation(&aggregation);

    if config.print_table {
        if let Err(e) = report::print_report_table(&sheet) {
            eprintln!("Warning: Failed to print table: {}", e);
        }
    }

    info!("Creating the report...");
    report::export_report(&aggregation, &sheet, config.format, &config.output_path, &config.results_root)?;
    info!("Consolidation complete. Resulting report is '{}'", config.output_path.display());

    ui::status(&report::format_summary(&aggregation));
    ui::status(&format!("Report saved to: {}", config.output_path.display()));
    Ok(())
}
