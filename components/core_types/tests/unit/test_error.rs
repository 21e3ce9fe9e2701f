//! Unit tests for MachineError and ErrorKind

use core_types::{ErrorKind, MachineError, SourceLine};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ModuleNotFound.to_string(), "ModuleNotFound");
        assert_eq!(ErrorKind::LabelNotFound.to_string(), "LabelNotFound");
    }
}

#[cfg(test)]
mod machine_error_tests {
    use super::*;

    #[test]
    fn test_machine_error_builder() {
        let line = SourceLine::new("a.lmp", 3, "R 1 x");
        let error = MachineError::new(ErrorKind::TypeError, line.clone())
            .with_message("Register declaration error.")
            .with_message("Register values must be integers.");

        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(error.line, line);
        assert_eq!(error.messages.len(), 2);
        assert!(error.traceback.is_empty());
    }

    #[test]
    fn test_machine_error_is_std_error() {
        let error = MachineError::new(ErrorKind::Io, SourceLine::new("gone.lmp", 0, ""))
            .with_message("file not found");
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.to_string().contains("file not found"));
    }

    #[test]
    fn test_or_traceback_only_fills_empty() {
        let site = SourceLine::new("a.lmp", 2, ". m(1)");
        let error = MachineError::new(ErrorKind::OrderError, SourceLine::new("m.lmm", 1, "R 2 0"))
            .or_traceback(|| vec![site.clone()]);
        assert_eq!(error.traceback, vec![site.clone()]);

        let error = error.or_traceback(Vec::new);
        assert_eq!(error.traceback, vec![site]);
    }
}
