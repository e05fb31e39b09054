use std::process::ExitCode;

use chperm::cli::{self, CliError, Invocation, Parsed};
use chperm::constants::{PROGRAM_NAME, VERSION_BANNER};
use chperm::logging::{stderr, JsonlSink, StderrSink};
use chperm::types::Error;
use chperm::Chperm;

fn main() -> ExitCode {
    stderr::init_from_env();
    match cli::parse(std::env::args_os()) {
        Ok(Parsed::Help) => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Parsed::Version) => {
            println!("{VERSION_BANNER}");
            ExitCode::SUCCESS
        }
        Ok(Parsed::Run(inv)) => run(&inv),
        Err(CliError::Usage(e)) => {
            // clap's rendering already carries the usage line
            eprint!("{e}");
            ExitCode::FAILURE
        }
        Err(CliError::Invalid(e)) => {
            eprintln!("{PROGRAM_NAME}: {e}");
            if matches!(e, Error::MissingOperand(_)) {
                eprint!("{}", cli::USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(inv: &Invocation) -> ExitCode {
    let api = Chperm::new(JsonlSink, StderrSink, inv.options.clone());
    let req = match api.prepare(&inv.owner_group, inv.mode.as_deref()) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("resolved request: {req:?}");

    let stdout = std::io::stdout();
    let report = api.run(&req, &inv.files, &mut stdout.lock());
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
