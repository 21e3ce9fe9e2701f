//! Unit tests for diagnostic rendering

use core_types::{render_diagnostic, ErrorKind, MachineError, SourceLine, DELIMITER};

#[test]
fn test_diagnostic_opens_and_closes_with_delimiter() {
    let error = MachineError::new(ErrorKind::SyntaxArity, SourceLine::new("a.lmp", 2, "+ 1 2 3"))
        .with_message("Instruction definition error.");
    let block = render_diagnostic(&error);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(DELIMITER.len(), 50);
    assert_eq!(lines.first(), Some(&DELIMITER));
    assert_eq!(lines.last(), Some(&DELIMITER));
}

#[test]
fn test_diagnostic_messages_use_offending_location() {
    let error = MachineError::new(ErrorKind::SyntaxArity, SourceLine::new("a.lmp", 2, "+ 1 2 3"))
        .with_message("Instruction definition error.")
        .with_message("Wrong number of tokens.");
    let block = render_diagnostic(&error);

    assert_eq!(
        block.lines().collect::<Vec<_>>(),
        vec![
            DELIMITER,
            "<<< ERROR - a.lmp: 2 >>> + 1 2 3",
            "<<< ERROR - a.lmp: 2 >>> Instruction definition error.",
            "<<< ERROR - a.lmp: 2 >>> Wrong number of tokens.",
            DELIMITER,
        ]
    );
}

#[test]
fn test_diagnostic_lists_traceback_before_offending_line() {
    let mut error = MachineError::new(ErrorKind::ModuleNotFound, SourceLine::new("m.lmm", 4, ". gone(1)"));
    error.traceback.push(SourceLine::new("main.lmp", 6, ". m(1,2)"));

    let block = render_diagnostic(&error);
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[1], "<<< ERROR - main.lmp: 6 >>> . m(1,2)");
    assert_eq!(lines[2], "<<< ERROR - m.lmm: 4 >>> . gone(1)");
}
