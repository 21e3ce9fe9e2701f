//! Unit tests for interpreter components

use core_types::{ErrorKind, Source, SourceLine};
use instruction_set::{Instruction, Opcode, Program, RegisterFile, RegisterId};
use interpreter::{CallFrame, Dispatcher, ExecutionContext, RunConfig, VM};
use scanner::MemoryModuleLoader;

fn vm() -> VM {
    VM::with_loader(MemoryModuleLoader::new())
}

fn run(text: &str) -> Vec<i64> {
    vm().run_source(&Source::from_text("unit.lmp", text), &mut std::io::sink())
        .unwrap()
        .into_vec()
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_vm_halt_only() {
    assert_eq!(run("R 1 5\nF\n"), vec![0, 5]);
}

#[test]
fn test_vm_execute_hand_built_program() {
    let mut registers = RegisterFile::new();
    registers.declare(1);
    let line = |n: usize, text: &str| SourceLine::new("built", n, text);
    let program = Program::new(
        registers,
        vec![
            Instruction::new(Opcode::Incr(RegisterId(1)), line(1, "+ 1")),
            Instruction::new(Opcode::Incr(RegisterId(0)), line(2, "+ 0")),
            Instruction::new(Opcode::Halt, line(3, "F")),
        ],
    );

    let registers = vm().execute(program, &mut std::io::sink()).unwrap();
    assert_eq!(registers.as_slice(), &[1, 2]);
}

#[test]
fn test_vm_declared_values_before_mutation() {
    assert_eq!(run("R 1 4\nR 2 -2\nR 3 0\nF\n"), vec![0, 4, -2, 0]);
}

#[test]
fn test_vm_accumulator_is_usable() {
    assert_eq!(run("R 1 0\n+ 0\n+ 0\n- 0\nF\n"), vec![1, 0]);
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_test_positive_executes_next() {
    assert_eq!(run("R 1 1\nR 2 0\nC 1\n+ 2\nF\n"), vec![0, 1, 1]);
}

#[test]
fn test_test_zero_skips_next() {
    assert_eq!(run("R 1 0\nR 2 0\nC 1\n+ 2\nF\n"), vec![0, 0, 0]);
}

#[test]
fn test_test_negative_skips_next() {
    assert_eq!(run("R 1 -1\nR 2 0\nC 1\n+ 2\nF\n"), vec![0, -1, 0]);
}

#[test]
fn test_jump_goes_to_first_matching_label() {
    let text = "R 1 0\nP a\n+ 1 a\n+ 1 a\nF\n";
    assert_eq!(run(text), vec![0, 2]);
}

#[test]
fn test_jump_backwards_loop() {
    // moves register 1 into register 2
    let text = "R 1 3\nR 2 0\nC 1 top\nP body\nP end\n- 1 body\n+ 2\nP top\nF end\n";
    assert_eq!(run(text), vec![0, 0, 3]);
}

// ============================================================================
// Runtime errors
// ============================================================================

#[test]
fn test_label_not_found() {
    let err = vm()
        .run_source(&Source::from_text("u.lmp", "R 1 0\nP nope\nF\n"), &mut std::io::sink())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::LabelNotFound);
}

#[test]
fn test_step_limit() {
    let vm = vm().with_config(RunConfig::default().with_max_steps(Some(10)));
    let err = vm
        .run_source(&Source::from_text("u.lmp", "R 1 0\nP loop loop\nF\n"), &mut std::io::sink())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::StepLimitExceeded);
}

#[test]
fn test_step_limit_not_hit() {
    let vm = vm().with_config(RunConfig::default().with_max_steps(Some(3)));
    let registers = vm
        .run_source(&Source::from_text("u.lmp", "R 1 0\n+ 1\n+ 1\nF\n"), &mut std::io::sink())
        .unwrap();
    assert_eq!(registers.as_slice(), &[0, 2]);
}

#[test]
fn test_overflow() {
    let text = format!("R 1 {}\n+ 1\nF\n", i64::MAX);
    let err = vm()
        .run_source(&Source::from_text("u.lmp", &text), &mut std::io::sink())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RegisterOverflow);
}

// ============================================================================
// Context and frames
// ============================================================================

#[test]
fn test_program_counter_past_end() {
    let loader = MemoryModuleLoader::new();
    let config = RunConfig::default();
    let mut registers = RegisterFile::new();
    registers.declare(0);
    let program = Program::new(
        registers,
        vec![Instruction::new(Opcode::Incr(RegisterId(1)), SourceLine::new("m.lmm", 2, "+ 1"))],
    );

    let mut ctx = ExecutionContext::from_program(program);
    let mut sink = std::io::sink();
    let err = Dispatcher::new(&config, &loader, &mut sink)
        .execute(&mut ctx)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ProgramCounterOutOfBounds);
    assert_eq!(err.line.number, 2);
}

#[test]
fn test_dispatcher_starts_without_frames() {
    let loader = MemoryModuleLoader::new();
    let config = RunConfig::default();
    let mut sink = std::io::sink();
    let dispatcher = Dispatcher::new(&config, &loader, &mut sink);
    assert_eq!(dispatcher.depth(), 0);
    assert_eq!(dispatcher.steps(), 0);
    assert!(dispatcher.traceback().is_empty());
}

#[test]
fn test_call_frame_clone_eq() {
    let frame = CallFrame::new("m", SourceLine::new("a.lmp", 1, ". m(1)"));
    assert_eq!(frame.clone(), frame);
}
