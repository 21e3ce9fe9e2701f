//! Machine error types and error handling.
//!
//! Every failure the scanner, the engine or the module resolver can detect
//! is a [`MachineError`]. Errors carry the offending [`SourceLine`], the
//! human-readable messages and the chain of module call sites that were
//! active when the error happened.

use crate::SourceLine;
use std::fmt;
use thiserror::Error;

/// The kind of machine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of tokens for a declaration or instruction line
    SyntaxArity,
    /// A token expected to be an integer is not one
    TypeError,
    /// A register declaration id is out of sequence
    OrderError,
    /// A module call has no, malformed or out-of-range arguments
    ModuleArgError,
    /// A module's program cannot be found
    ModuleNotFound,
    /// A top-level program has no registers or does not end with a halt
    IntegrityError,
    /// A jump names a label no instruction carries
    LabelNotFound,
    /// An instruction addresses a register outside the register file
    RegisterOutOfBounds,
    /// Execution ran past the last instruction
    ProgramCounterOutOfBounds,
    /// An increment or decrement overflowed the register
    RegisterOverflow,
    /// Module calls nested deeper than the configured limit
    CallDepthExceeded,
    /// Execution ran more steps than the configured limit
    StepLimitExceeded,
    /// A program file could not be read
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::SyntaxArity => "SyntaxArity",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::OrderError => "OrderError",
            ErrorKind::ModuleArgError => "ModuleArgError",
            ErrorKind::ModuleNotFound => "ModuleNotFound",
            ErrorKind::IntegrityError => "IntegrityError",
            ErrorKind::LabelNotFound => "LabelNotFound",
            ErrorKind::RegisterOutOfBounds => "RegisterOutOfBounds",
            ErrorKind::ProgramCounterOutOfBounds => "ProgramCounterOutOfBounds",
            ErrorKind::RegisterOverflow => "RegisterOverflow",
            ErrorKind::CallDepthExceeded => "CallDepthExceeded",
            ErrorKind::StepLimitExceeded => "StepLimitExceeded",
            ErrorKind::Io => "Io",
        };
        f.write_str(name)
    }
}

/// A machine error with location, messages and traceback.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, MachineError, SourceLine};
///
/// let error = MachineError::new(ErrorKind::TypeError, SourceLine::new("a.lmp", 2, "+ x"))
///     .with_message("Instruction argument must be an integer.");
///
/// assert_eq!(
///     error.to_string(),
///     "TypeError at a.lmp: 2: Instruction argument must be an integer."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}: {}", .messages.join(" "))]
pub struct MachineError {
    /// The type of error
    pub kind: ErrorKind,
    /// The line that caused the error
    pub line: SourceLine,
    /// Human-readable messages, most general first
    pub messages: Vec<String>,
    /// Active module call sites, outermost first
    pub traceback: Vec<SourceLine>,
}

impl MachineError {
    /// Create an error without messages or traceback
    pub fn new(kind: ErrorKind, line: SourceLine) -> Self {
        Self {
            kind,
            line,
            messages: Vec::new(),
            traceback: Vec::new(),
        }
    }

    /// Append a message line
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Attach the call-site traceback unless one is already attached.
    ///
    /// The innermost module call attaches the full stack first, so outer
    /// frames leave it untouched while the error unwinds.
    pub fn or_traceback(mut self, traceback: impl FnOnce() -> Vec<SourceLine>) -> Self {
        if self.traceback.is_empty() {
            self.traceback = traceback();
        }
        self
    }
}

/// Result type for machine operations
pub type MachineResult<T> = Result<T, MachineError>;
