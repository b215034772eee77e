//! Lists the components declared in an AndroidManifest.xml, one
//! `<kind>: <name>` line each.

use clap::Parser;
use log::info;
use result_consolidator::cli::ManifestArgs;
use result_consolidator::{config, manifest, ui};

fn main() {
    let args = ManifestArgs::parse();
    config::init_logging(config::log_level(args.verbose));

    let result = manifest::read_manifest(&args.manifest)
        .and_then(|components| manifest::write_components(&components, &args.output).map(|_| components));

    match result {
        Ok(components) => {
            info!("Wrote {} components to {}", components.components.len(), args.output.display());
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
