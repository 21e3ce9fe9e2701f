//! Virtual Machine for program execution
//!
//! Main entry point: scans a top-level program and runs it with a
//! [`RunConfig`] and a [`ModuleLoader`].

use core_types::{MachineResult, Source};
use instruction_set::{Program, RegisterFile};
use scanner::{load_program, FsModuleLoader, ModuleLoader, Scanner};
use std::io::Write;
use std::path::Path;

use crate::config::RunConfig;
use crate::context::ExecutionContext;
use crate::dispatch::Dispatcher;

/// Virtual Machine for executing register machine programs
///
/// The VM owns the run configuration and the module loader. Each run gets
/// fresh register files; nothing is cached between runs.
pub struct VM {
    /// Settings applied to every run
    config: RunConfig,
    /// Where module programs come from
    loader: Box<dyn ModuleLoader>,
}

impl VM {
    /// Create a VM that loads modules from the default module directory
    pub fn new() -> Self {
        Self::with_loader(FsModuleLoader::default())
    }

    /// Create a VM that loads modules through `loader`
    pub fn with_loader(loader: impl ModuleLoader + 'static) -> Self {
        Self {
            config: RunConfig::default(),
            loader: Box::new(loader),
        }
    }

    /// Replace the run configuration
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Current run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Module loader used for calls
    pub fn loader(&self) -> &dyn ModuleLoader {
        self.loader.as_ref()
    }

    /// Scan a top-level program without running it
    pub fn scan(&self, source: &Source) -> MachineResult<Program> {
        Scanner::new(self.loader.as_ref()).scan_program(source)
    }

    /// Execute an already scanned program and return its final registers
    ///
    /// # Example
    ///
    /// ```
    /// use core_types::Source;
    /// use interpreter::VM;
    /// use scanner::MemoryModuleLoader;
    ///
    /// let vm = VM::with_loader(MemoryModuleLoader::new());
    /// let program = vm.scan(&Source::from_text("a.lmp", "R 1 5\nF\n")).unwrap();
    ///
    /// let registers = vm.execute(program, &mut std::io::sink()).unwrap();
    /// assert_eq!(registers.as_slice(), &[0, 5]);
    /// ```
    pub fn execute(&self, program: Program, out: &mut dyn Write) -> MachineResult<RegisterFile> {
        self.run_context(ExecutionContext::from_program(program), out)
    }

    /// Execute a program scanned from `source`
    ///
    /// Runtime errors past the last instruction are reported at the
    /// source's last line.
    pub fn execute_scanned(
        &self,
        program: Program,
        source: &Source,
        out: &mut dyn Write,
    ) -> MachineResult<RegisterFile> {
        self.run_context(ExecutionContext::new(program, source.last_line()), out)
    }

    /// Scan and execute a top-level program
    pub fn run_source(&self, source: &Source, out: &mut dyn Write) -> MachineResult<RegisterFile> {
        let program = self.scan(source)?;
        self.execute_scanned(program, source, out)
    }

    /// Load, scan and execute a top-level program file
    pub fn run_file(&self, path: impl AsRef<Path>, out: &mut dyn Write) -> MachineResult<RegisterFile> {
        let source = load_program(path)?;
        self.run_source(&source, out)
    }

    fn run_context(&self, mut ctx: ExecutionContext, out: &mut dyn Write) -> MachineResult<RegisterFile> {
        let mut dispatcher = Dispatcher::new(&self.config, self.loader.as_ref(), out);
        dispatcher.execute(&mut ctx)?;

        tracing::info!(
            steps = dispatcher.steps(),
            registers = %ctx.registers,
            "program halted"
        );
        Ok(ctx.registers)
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VM {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VM")
            .field("config", &self.config)
            .field("loader", &"dyn ModuleLoader")
            .finish()
    }
}
