use clap::Parser;
use colored::Colorize;

use catree::cli::{self, Args};

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "[ERR]".bold().bright_red());
            ExitCode::FAILURE
        },
    }
}
