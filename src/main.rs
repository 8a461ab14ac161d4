//! Cash card advisor CLI

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use cashcard::{config::Config, observability, shell};

/// Cash card advisor entry point
pub fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            // --help and --version arrive here as well, with exit code 0
            let code = u8::try_from(err.exit_code()).unwrap_or(2);

            if err.print().is_err() {
                return ExitCode::FAILURE;
            }

            return ExitCode::from(code);
        }
    };

    if let Err(err) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for logging errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let color = !config.no_color && stdout.is_terminal();

    match shell::run(&config, color, io::stdin().lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "cashcard failed");

            #[expect(clippy::print_stderr, reason = "errors are reported to the cashier")]
            {
                eprintln!("Error: {err}");
            }

            ExitCode::FAILURE
        }
    }
}
