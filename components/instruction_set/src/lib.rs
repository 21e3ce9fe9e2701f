//! Instruction set for the register machine
//!
//! This crate provides the validated, immutable program model produced by
//! the scanner and consumed by the interpreter.
//!
//! # Features
//!
//! - Closed [`Opcode`] set with typed arguments
//! - Token-level instruction construction with arity and type checks
//! - [`RegisterFile`] with the reserved accumulator at index 0
//! - [`Program`] listing and label lookup
//!
//! # Example
//!
//! ```
//! use core_types::SourceLine;
//! use instruction_set::{Instruction, Opcode, Program, RegisterFile, RegisterId};
//!
//! let mut registers = RegisterFile::new();
//! registers.declare(5);
//!
//! let line = SourceLine::new("inline.lmp", 2, "+ 1");
//! let inst = Instruction::from_line(&line).unwrap();
//! assert_eq!(inst.opcode, Opcode::Incr(RegisterId(1)));
//!
//! let program = Program::new(registers, vec![inst]);
//! assert_eq!(program.instruction_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instruction;
pub mod opcode;
pub mod program;
pub mod registers;

// Re-export main types at crate root
pub use instruction::Instruction;
pub use opcode::{Mnemonic, ModuleCall, Opcode, RegisterId};
pub use program::Program;
pub use registers::{RegisterAccessError, RegisterFile};
