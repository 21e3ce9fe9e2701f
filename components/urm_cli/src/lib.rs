//! Register machine CLI library
//!
//! Provides the argument parser, the [`Runtime`] that drives the
//! interpreter, the suite runner used by `urm --suite`, and [`run`], which
//! the binary calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod error;
pub mod runtime;
pub mod suite;

pub use app::{error_report, exit_code, run};
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runtime::{RunReport, Runtime};
pub use suite::{run_manifest, CaseResult, SuiteCase, SuiteManifest, SuiteReport};
