//! Execution context for one program frame

use core_types::SourceLine;
use instruction_set::{Instruction, Program, RegisterFile};

/// Execution state of one program or module frame
///
/// Owns the frame's register file; nothing else aliases it while the frame
/// runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionContext {
    /// Register file for this frame
    pub registers: RegisterFile,
    /// Index of the next instruction
    pub program_counter: usize,
    /// Instructions being executed
    pub instructions: Vec<Instruction>,
    /// Line reported when execution runs past the last instruction
    pub end_line: SourceLine,
}

impl ExecutionContext {
    /// Create a context positioned at the first instruction
    pub fn new(program: Program, end_line: SourceLine) -> Self {
        let (registers, instructions) = program.into_parts();
        Self {
            registers,
            program_counter: 0,
            instructions,
            end_line,
        }
    }

    /// Create a context whose end line is its last instruction's line
    pub fn from_program(program: Program) -> Self {
        let end_line = program
            .instructions
            .last()
            .map(|inst| inst.source.clone())
            .unwrap_or_else(|| SourceLine::new("<program>", 0, ""));
        Self::new(program, end_line)
    }

    /// Index of the first instruction carrying `label`
    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.instructions.iter().position(|inst| inst.has_label(label))
    }
}
