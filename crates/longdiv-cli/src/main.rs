//! longdiv CLI - polynomial long division from the terminal.
//!
//! `longdiv 0` prints the program identification, `longdiv 1` prompts for a
//! dividend and a divisor and prints their quotient and remainder.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod session;

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::FmtSubscriber;

use config::{Config, Verbosity};

/// What the program should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print the program identification and exit.
    #[value(name = "0")]
    Identify,
    /// Prompt for two polynomials and divide them.
    #[value(name = "1")]
    Divide,
}

/// Polynomial long division over real coefficients.
#[derive(Parser, Debug)]
#[command(name = "longdiv")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// 0 prints the identification, 1 runs an interactive division.
    #[arg(value_enum)]
    mode: Mode,
}

/// Installs a stderr subscriber at the configured verbosity.
fn init_logging(verbosity: Verbosity) {
    let Some(level) = verbosity.level() else {
        return;
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::load() {
        Ok(config) => {
            init_logging(config.verbosity);
            config
        }
        Err(e) => {
            init_logging(Verbosity::default());
            warn!(error = %e, "using default configuration");
            Config::default()
        }
    };

    match args.mode {
        Mode::Identify => {
            println!("{} {}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Mode::Divide => {
            let result = session::run(&mut io::stdin().lock(), &mut io::stdout().lock(), &config);
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    debug!(error = ?e, "session failed");
                    println!();
                    eprintln!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_parse() {
        let args = Args::try_parse_from(["longdiv", "0"]).unwrap();
        assert_eq!(args.mode, Mode::Identify);

        let args = Args::try_parse_from(["longdiv", "1"]).unwrap();
        assert_eq!(args.mode, Mode::Divide);
    }

    #[test]
    fn test_rejects_other_arguments() {
        assert!(Args::try_parse_from(["longdiv"]).is_err());
        assert!(Args::try_parse_from(["longdiv", "2"]).is_err());
        assert!(Args::try_parse_from(["longdiv", "0", "1"]).is_err());
        assert!(Args::try_parse_from(["longdiv", "--help"]).is_err());
    }
}
