//! Suite runner
//!
//! A suite manifest is a JSON file listing programs together with the
//! results they must produce:
//!
//! ```json
//! {
//!   "modules": "modules",
//!   "cases": [
//!     { "program": "soma.lmp", "registers": [0, 5, 0] },
//!     { "name": "prints", "program": "show.lmp", "output": ["Registrador 1: 2"] },
//!     { "program": "broken.lmp", "error": "OrderError" }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the manifest's directory. A case with
//! no expectations passes as long as the program halts.

use crate::error::{CliError, CliResult};
use crate::runtime::{RunReport, Runtime};
use interpreter::RunConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One program and its expected results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCase {
    /// Display name; defaults to the program path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Program file to run
    pub program: PathBuf,
    /// Expected final registers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registers: Option<Vec<i64>>,
    /// Expected output lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<String>>,
    /// Expected error kind, e.g. `"IntegrityError"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuiteCase {
    /// Name shown in reports
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.program.display().to_string())
    }

    /// Compare a run's result against the expectations
    pub fn check(&self, result: CliResult<RunReport>) -> CaseResult {
        match (result, &self.error) {
            (Ok(report), None) => {
                if let Some(expected) = &self.registers {
                    if &report.registers != expected {
                        return CaseResult::Fail(format!(
                            "expected registers {:?}, got {:?}",
                            expected, report.registers
                        ));
                    }
                }
                if let Some(expected) = &self.output {
                    if &report.output != expected {
                        return CaseResult::Fail(format!(
                            "expected output {:?}, got {:?}",
                            expected, report.output
                        ));
                    }
                }
                CaseResult::Pass
            }
            (Ok(_), Some(kind)) => {
                CaseResult::Fail(format!("expected {} but the program halted", kind))
            }
            (Err(CliError::Machine(e)), Some(kind)) if e.kind.to_string() == *kind => {
                CaseResult::Pass
            }
            (Err(e), _) => CaseResult::Fail(e.to_string()),
        }
    }
}

/// Result of a single case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    /// Expectations met
    Pass,
    /// Expectations not met, with the reason
    Fail(String),
}

/// A list of cases and where their modules live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteManifest {
    /// Module directory; falls back to the runner's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<PathBuf>,
    /// Cases in run order
    pub cases: Vec<SuiteCase>,
}

impl SuiteManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(text: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Run every case, resolving relative paths against `base`
    ///
    /// `modules` is used when the manifest names no module directory.
    pub fn run(&self, base: &Path, config: &RunConfig, modules: &Path) -> SuiteReport {
        let modules = match &self.modules {
            Some(dir) => base.join(dir),
            None => modules.to_path_buf(),
        };
        let runtime = Runtime::new(config.clone(), modules);
        let mut report = SuiteReport::new();

        for case in &self.cases {
            let result = case.check(runtime.report_file(base.join(&case.program)));
            tracing::debug!(case = %case.display_name(), ?result, "suite case finished");
            report.add_result(&case.display_name(), result);
        }

        report
    }
}

/// Load a manifest file and run it
pub fn run_manifest(path: &Path, config: &RunConfig, modules: &Path) -> CliResult<SuiteReport> {
    let manifest = SuiteManifest::load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(manifest.run(base, config, modules))
}

/// Suite run report with statistics and failure details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Total number of cases run
    pub total: usize,
    /// Number of cases that passed
    pub passed: usize,
    /// Number of cases that failed
    pub failed: usize,
    /// List of failures with (case, reason)
    pub failures: Vec<(String, String)>,
}

impl SuiteReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a case result to the report
    pub fn add_result(&mut self, name: &str, result: CaseResult) {
        self.total += 1;
        match result {
            CaseResult::Pass => self.passed += 1,
            CaseResult::Fail(reason) => {
                self.failed += 1;
                self.failures.push((name.to_string(), reason));
            }
        }
    }

    /// Check if every case passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Suite results:\n\
             Total: {}\n\
             Passed: {}\n\
             Failed: {}",
            self.total, self.passed, self.failed
        )
    }

    /// Generate a detailed report including failures
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures:\n");
            for (name, reason) in &self.failures {
                output.push_str(&format!("  - {}\n    Reason: {}\n", name, reason));
            }
        }

        output
    }
}
