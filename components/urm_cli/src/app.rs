//! Command dispatch for the `urm` binary
//!
//! [`run`] does what the parsed arguments ask for. [`exit_code`] and
//! [`error_report`] turn its outcome into the process status and the text
//! shown on stderr.

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use crate::suite::run_manifest;
use core_types::render_diagnostic;
use std::io::Write;

/// Run a suite or a single program, writing results to `out`.
///
/// Returns `Ok(false)` when a suite ran but some case failed.
pub fn run(cli: &Cli, out: &mut dyn Write) -> CliResult<bool> {
    let config = cli.run_config();

    if let Some(manifest) = &cli.suite {
        let report = run_manifest(manifest, &config, &cli.modules)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{}", report.detailed_summary())?;
        }
        return Ok(report.is_success());
    }

    let Some(file) = &cli.file else {
        return Err(CliError::Usage(
            "pass --file <PROGRAM> or --suite <MANIFEST>; see 'urm --help'".to_string(),
        ));
    };

    let runtime = Runtime::new(config, &cli.modules)
        .with_print_program(cli.print_program)
        .with_print_registers(cli.print_registers);

    if cli.json {
        let report = runtime.report_file(file)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        runtime.execute_file(file, out)?;
    }

    Ok(true)
}

/// Process exit status for an outcome of [`run`]
pub fn exit_code(result: &CliResult<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

/// Text printed on stderr for a failed run
pub fn error_report(error: &CliError) -> String {
    match error {
        CliError::Machine(e) => render_diagnostic(e),
        e => format!("Error: {}\n", e),
    }
}
