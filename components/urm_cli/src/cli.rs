//! Command line arguments

use clap::Parser;
use interpreter::{RunConfig, DEFAULT_MAX_CALL_DEPTH};
use scanner::DEFAULT_MODULE_DIR;
use std::path::PathBuf;

/// Unlimited register machine interpreter
#[derive(Debug, Clone, Parser)]
#[command(name = "urm", version, about = "Runs register machine programs")]
pub struct Cli {
    /// Program file to run (.lmp)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory searched for module files (.lmm)
    #[arg(short, long, default_value = DEFAULT_MODULE_DIR)]
    pub modules: PathBuf,

    /// Print the registers and instruction before every step
    #[arg(short, long)]
    pub debug: bool,

    /// Maximum nesting of module calls
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    pub max_depth: usize,

    /// Abort after this many executed instructions
    #[arg(long = "max-steps")]
    pub max_steps: Option<u64>,

    /// Print the scanned program before running it
    #[arg(long)]
    pub print_program: bool,

    /// Print the final registers after the program halts
    #[arg(long)]
    pub print_registers: bool,

    /// Print a JSON run report instead of plain output
    #[arg(long)]
    pub json: bool,

    /// Run every case listed in a JSON suite manifest
    #[arg(long, value_name = "MANIFEST", conflicts_with = "file")]
    pub suite: Option<PathBuf>,

    /// Log interpreter activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments for running a single file with default settings
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            modules: PathBuf::from(DEFAULT_MODULE_DIR),
            debug: false,
            max_depth: DEFAULT_MAX_CALL_DEPTH,
            max_steps: None,
            print_program: false,
            print_registers: false,
            json: false,
            suite: None,
            verbose: false,
        }
    }

    /// Run configuration selected by the flags
    pub fn run_config(&self) -> RunConfig {
        RunConfig::default()
            .with_debug(self.debug)
            .with_max_call_depth(self.max_depth)
            .with_max_steps(self.max_steps)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
