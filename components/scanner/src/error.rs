//! Scanner error helpers

use core_types::{ErrorKind, MachineError, SourceLine};

/// Create a register declaration error
pub fn declaration_error(kind: ErrorKind, detail: &str, line: &SourceLine) -> MachineError {
    MachineError::new(kind, line.clone())
        .with_message("Register declaration error.")
        .with_message(detail)
}

/// Create a module call error
pub fn module_call_error(kind: ErrorKind, detail: impl Into<String>, line: &SourceLine) -> MachineError {
    MachineError::new(kind, line.clone())
        .with_message("Module call error.")
        .with_message(detail)
}

/// Create a program integrity error
pub fn integrity_error(detail: &str, line: &SourceLine) -> MachineError {
    MachineError::new(ErrorKind::IntegrityError, line.clone())
        .with_message("Program integrity error.")
        .with_message(detail)
}
