//! PromoSwap CLI

use std::process::ExitCode;

use tracing::error;

mod commands;
mod config;
mod logging;

fn main() -> ExitCode {
    let config = config::Config::load();

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(clippy::print_stderr, reason = "no subscriber to report through")]
        {
            eprintln!("failed to initialise logging: {error}");
        }

        return ExitCode::FAILURE;
    }

    match commands::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            #[expect(clippy::print_stderr, reason = "errors must reach the user at any log level")]
            {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}
