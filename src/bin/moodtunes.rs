use clap::Parser;
use std::process;

use tasktunes::cli::{self, MoodTunesCli};
use tasktunes::logging;

fn main() {
    logging::init();
    let cli_args = MoodTunesCli::parse();
    let exit_code = cli::mood_app::run(&cli_args.file);
    process::exit(exit_code);
}
