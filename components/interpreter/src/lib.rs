//! Register machine interpreter
//!
//! This crate provides the execution engine:
//! - Fetch-decode-execute loop over a scanned program
//! - Conditional skip, label jumps and printing
//! - Module calls with copy-in/copy-out register binding
//! - Call depth and step limits from [`RunConfig`]
//!
//! # Example
//!
//! ```
//! use core_types::Source;
//! use interpreter::VM;
//! use scanner::MemoryModuleLoader;
//!
//! let vm = VM::with_loader(MemoryModuleLoader::new());
//! let source = Source::from_text("main.lmp", "R 1 0\n+ 1\n+ 1\nE 1\nF\n");
//!
//! let mut out = Vec::new();
//! let registers = vm.run_source(&source, &mut out).unwrap();
//!
//! assert_eq!(registers.as_slice(), &[0, 2]);
//! assert_eq!(String::from_utf8(out).unwrap(), "Registrador 1: 2\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call_frame;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod resolver;
pub mod vm;

// Re-export main types at crate root
pub use call_frame::CallFrame;
pub use config::{RunConfig, DEFAULT_MAX_CALL_DEPTH};
pub use context::ExecutionContext;
pub use dispatch::Dispatcher;
pub use vm::VM;
