//! Program Scanner Component
//!
//! Provides source loading, module lookup and the scanner that turns tagged
//! source lines into a validated [`Program`](instruction_set::Program).
//!
//! # Overview
//!
//! - [`read_source`] / [`load_program`] - Read a program file into lines
//! - [`ModuleLoader`] - Maps module names to loadable programs
//! - [`FsModuleLoader`] - Modules stored as `<dir>/<name>.lmm`
//! - [`MemoryModuleLoader`] - Modules held in memory
//! - [`Scanner`] - Static validation and program construction
//!
//! # Example
//!
//! ```
//! use core_types::Source;
//! use scanner::{MemoryModuleLoader, Scanner};
//!
//! let source = Source::from_text("main.lmp", "R 1 5\nF\n");
//! let loader = MemoryModuleLoader::new();
//!
//! let program = Scanner::new(&loader).scan_program(&source).unwrap();
//! assert_eq!(program.registers.as_slice(), &[0, 5]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod loader;
pub mod scanner;
pub mod source;

pub use loader::{FsModuleLoader, MemoryModuleLoader, ModuleLoader, DEFAULT_MODULE_DIR};
pub use scanner::Scanner;
pub use source::{load_program, read_source, MODULE_EXTENSION, PROGRAM_EXTENSION};
