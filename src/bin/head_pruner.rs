//! head_pruner - remove directories and files from HEAD

use clap::Parser;

use packsweep::cli::PruneArgs;
use packsweep::{commands, logging, ui};

fn main() {
    let args = PruneArgs::parse();
    logging::init(args.global.verbose);

    match commands::prune::run(&args) {
        Ok(summary) => {
            if !summary.failed.is_empty() {
                log::warn!(
                    "{} asset(s) could not be removed: {}",
                    summary.failed.len(),
                    summary.failed.join(", ")
                );
            }
        }
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    }
}
