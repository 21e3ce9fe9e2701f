//! Runtime orchestration for program execution
//!
//! The Runtime wraps a configured [`VM`] and adds the CLI's presentation
//! options: the program listing and the final register dump.

use crate::error::CliResult;
use core_types::Source;
use interpreter::{RunConfig, VM};
use scanner::{load_program, FsModuleLoader, ModuleLoader};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of one successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Final register values, accumulator first
    pub registers: Vec<i64>,
    /// Lines written to the output sink, in order
    pub output: Vec<String>,
}

impl RunReport {
    /// Build a report from final registers and captured output bytes
    pub fn new(registers: Vec<i64>, output: &[u8]) -> Self {
        Self {
            registers,
            output: String::from_utf8_lossy(output)
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Main runtime that drives scanning and execution
pub struct Runtime {
    /// Configured virtual machine
    vm: VM,
    /// Whether to print the scanned program before execution
    print_program: bool,
    /// Whether to print the final registers after a halt
    print_registers: bool,
}

impl Runtime {
    /// Create a runtime loading modules from `modules`
    ///
    /// # Example
    /// ```
    /// use interpreter::RunConfig;
    /// use urm_cli::Runtime;
    ///
    /// let runtime = Runtime::new(RunConfig::default(), "modules");
    /// assert!(!runtime.is_print_program_enabled());
    /// ```
    pub fn new(config: RunConfig, modules: impl Into<PathBuf>) -> Self {
        Self::with_loader(config, FsModuleLoader::new(modules))
    }

    /// Create a runtime resolving modules through `loader`
    pub fn with_loader(config: RunConfig, loader: impl ModuleLoader + 'static) -> Self {
        Self {
            vm: VM::with_loader(loader).with_config(config),
            print_program: false,
            print_registers: false,
        }
    }

    /// Enable the program listing
    pub fn with_print_program(mut self, enabled: bool) -> Self {
        self.print_program = enabled;
        self
    }

    /// Enable the final register dump
    pub fn with_print_registers(mut self, enabled: bool) -> Self {
        self.print_registers = enabled;
        self
    }

    /// Check if the program listing is enabled
    pub fn is_print_program_enabled(&self) -> bool {
        self.print_program
    }

    /// Check if the register dump is enabled
    pub fn is_print_registers_enabled(&self) -> bool {
        self.print_registers
    }

    /// Get access to the VM
    pub fn vm(&self) -> &VM {
        &self.vm
    }

    /// Execute a program file, writing its output to `out`
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, scanning fails, or
    /// execution fails
    ///
    /// # Example
    /// ```no_run
    /// use interpreter::RunConfig;
    /// use urm_cli::Runtime;
    ///
    /// let runtime = Runtime::new(RunConfig::default(), "modules");
    /// let registers = runtime.execute_file("soma.lmp", &mut std::io::stdout()).unwrap();
    /// ```
    pub fn execute_file(&self, path: impl AsRef<Path>, out: &mut dyn Write) -> CliResult<Vec<i64>> {
        let source = load_program(path)?;
        self.execute_source(&source, out)
    }

    /// Execute program text, writing its output to `out`
    ///
    /// # Example
    /// ```
    /// use interpreter::RunConfig;
    /// use urm_cli::Runtime;
    ///
    /// let runtime = Runtime::new(RunConfig::default(), "modules");
    /// let mut out = Vec::new();
    /// let registers = runtime.execute_string("inline.lmp", "R 1 1\nE 1\nF\n", &mut out).unwrap();
    ///
    /// assert_eq!(registers, vec![0, 1]);
    /// assert_eq!(out, b"Registrador 1: 1\n");
    /// ```
    pub fn execute_string(&self, name: &str, text: &str, out: &mut dyn Write) -> CliResult<Vec<i64>> {
        self.execute_source(&Source::from_text(name, text), out)
    }

    /// Execute a loaded source, writing its output to `out`
    pub fn execute_source(&self, source: &Source, out: &mut dyn Write) -> CliResult<Vec<i64>> {
        let program = self.vm.scan(source)?;
        if self.print_program {
            writeln!(out, "{}", program)?;
        }

        let registers = self.vm.execute_scanned(program, source, out)?;

        if self.print_registers {
            writeln!(out, "Registradores: {}", registers)?;
        }

        Ok(registers.into_vec())
    }

    /// Execute a program file and capture its output into a report
    pub fn report_file(&self, path: impl AsRef<Path>) -> CliResult<RunReport> {
        let mut out = Vec::new();
        let registers = self.execute_file(path, &mut out)?;
        Ok(RunReport::new(registers, &out))
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("vm", &self.vm)
            .field("print_program", &self.print_program)
            .field("print_registers", &self.print_registers)
            .finish()
    }
}
