//! Register machine CLI
//!
//! Entry point for the interpreter. Parses CLI arguments, installs logging
//! and delegates to [`urm_cli::run`].

use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use urm_cli::{error_report, exit_code, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = urm_cli::run(&cli, &mut out);
    let _ = out.flush();

    if let Err(e) = &result {
        eprint!("{}", error_report(e));
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}
