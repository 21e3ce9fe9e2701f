//! Program - scanned program container
//!
//! Contains the initial register file and the instruction sequence.

use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::registers::RegisterFile;
use std::fmt;

/// A scanned program ready for execution
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Initial register state
    pub registers: RegisterFile,
    /// Sequence of instructions
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from its parts
    pub fn new(registers: RegisterFile, instructions: Vec<Instruction>) -> Self {
        Self {
            registers,
            instructions,
        }
    }

    /// Append an instruction
    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Get the number of instructions
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the last instruction is a halt
    pub fn ends_with_halt(&self) -> bool {
        matches!(
            self.instructions.last().map(|inst| &inst.opcode),
            Some(Opcode::Halt)
        )
    }

    /// Split into register file and instructions
    pub fn into_parts(self) -> (RegisterFile, Vec<Instruction>) {
        (self.registers, self.instructions)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "registers: {}", self.registers)?;
        for (index, inst) in self.instructions.iter().enumerate() {
            writeln!(f, "{:>4}  {:<24} ; {}", index, inst.to_string(), inst.source)?;
        }
        Ok(())
    }
}
