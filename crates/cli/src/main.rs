use std::process::ExitCode;

use clap::Parser;
use zipf_cli::app;
use zipf_cli::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match app::run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
