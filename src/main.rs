use clap::Parser;
use std::process;

use tasktunes::cli::{self, TasksCli};
use tasktunes::logging;

fn main() {
    logging::init();
    let cli_args = TasksCli::parse();
    let exit_code = cli::task_app::run(&cli_args.file);
    process::exit(exit_code);
}
