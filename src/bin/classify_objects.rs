//! classify_objects - find the largest packed objects and whether they are in HEAD

use clap::Parser;

use packsweep::cli::ClassifyArgs;
use packsweep::{commands, logging, ui};

fn main() {
    let args = ClassifyArgs::parse();
    logging::init(args.global.verbose);

    if let Err(e) = commands::classify::run(&args) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}
