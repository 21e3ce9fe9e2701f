//! Tests for Program and RegisterFile

use core_types::SourceLine;
use instruction_set::{
    Instruction, Opcode, Program, RegisterAccessError, RegisterFile, RegisterId,
};

#[test]
fn test_program_new() {
    let program = Program::default();
    assert_eq!(program.instruction_count(), 0);
    assert_eq!(program.registers.as_slice(), &[0]);
}

#[test]
fn test_program_into_parts() {
    let mut registers = RegisterFile::new();
    registers.declare(3);
    let halt = Instruction::new(Opcode::Halt, SourceLine::new("a.lmp", 2, "F"));
    let program = Program::new(registers.clone(), vec![halt.clone()]);

    let (regs, instructions) = program.into_parts();
    assert_eq!(regs, registers);
    assert_eq!(instructions, vec![halt]);
}

#[test]
fn test_register_file_set_and_get() {
    let mut registers = RegisterFile::from_values(vec![0, 1, 2]);
    registers.set(RegisterId(2), 40).unwrap();
    assert_eq!(registers.get(RegisterId(2)), Ok(40));
    assert!(registers.contains(RegisterId(2)));
    assert!(!registers.contains(RegisterId(3)));
}

#[test]
fn test_register_file_from_empty_values() {
    let registers = RegisterFile::from_values(Vec::new());
    assert_eq!(registers.len(), 1);
}

#[test]
fn test_register_file_set_out_of_bounds() {
    let mut registers = RegisterFile::new();
    assert_eq!(
        registers.set(RegisterId(1), 9),
        Err(RegisterAccessError::OutOfBounds { index: 1, len: 1 })
    );
}

#[test]
fn test_register_file_display() {
    let registers = RegisterFile::from_values(vec![0, 5]);
    let error = RegisterAccessError::OutOfBounds { index: 7, len: 2 };
    assert_eq!(registers.to_string(), "[0, 5]");
    assert_eq!(error.to_string(), "register 7 does not exist; 2 registers are declared");
}
