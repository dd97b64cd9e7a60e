mod args;
mod commands;

use args::{Command, Invocation, USAGE, UsageError};
use commands::Outcome;
use sectionconf_config::Config;
use std::{env, io, process::ExitCode};

const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = match Invocation::parse(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => return usage_error(&e),
    };
    if invocation.command == Command::Help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(path) = invocation.file.or(config.default_file) else {
        return usage_error(&UsageError::NoFile(config_path));
    };
    log::debug!("Using file {}", path.display());

    let mut stdout = io::stdout().lock();
    match commands::run(&invocation.command, &path, &config.writer, &mut stdout) {
        Ok(outcome) => {
            if let Outcome::NotFound { section, key } = &outcome {
                eprintln!("No key {key:?} in [{section}]");
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(e: &UsageError) -> ExitCode {
    eprintln!("Error: {e}");
    eprintln!("{USAGE}");
    ExitCode::from(USAGE_EXIT)
}
