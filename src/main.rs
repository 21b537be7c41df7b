use std::process::ExitCode;

use clap::Parser;
use wortschatz::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run_cli(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
