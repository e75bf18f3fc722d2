//! Console entry point.
//!
//! # Responsibility
//! - Load the roster from the working directory, run the shell, save once on exit.
//! - Exit non-zero when the stored roster cannot be read or written.

use insured_cli::Shell;
use insured_core::{init_logging, AppConfig, JsonRosterStore, RegistryService};
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::from_current_dir() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let mut service = match RegistryService::open(JsonRosterStore::new(&config.data_file)) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("cannot load roster: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=session_start module=cli status=ok records={}",
        service.registry().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell_result = Shell::new(stdin.lock(), stdout.lock(), service.registry_mut()).run();
    if let Err(err) = &shell_result {
        error!("event=shell_exit module=cli status=error error={err}");
        eprintln!("console error: {err}");
    }

    if let Err(err) = service.save() {
        eprintln!("cannot save roster: {err}");
        return ExitCode::FAILURE;
    }

    match shell_result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
