//! Program scanner - turns tagged source lines into a validated program
//!
//! Scanning is a single pass over the lines. Register declarations build the
//! initial register file, operation lines become instructions, and module
//! calls are checked against the registers declared so far and against the
//! module loader. The first error stops the scan.

use crate::error::{declaration_error, integrity_error, module_call_error};
use crate::loader::ModuleLoader;
use core_types::{ErrorKind, MachineResult, Source, SourceLine};
use instruction_set::{Instruction, Mnemonic, ModuleCall, Opcode, Program, RegisterFile};
use std::slice::Iter;

/// How declarations obtain their values
enum Mode<'v> {
    /// Declarations use their literal values; integrity is checked at the end
    TopLevel,
    /// Declarations consume caller-supplied values in order
    Module { arguments: Iter<'v, i64>, expected: usize },
}

/// Scanner producing [`Program`]s from [`Source`]s
pub struct Scanner<'a> {
    loader: &'a dyn ModuleLoader,
}

impl<'a> Scanner<'a> {
    /// Create a scanner that resolves module calls through `loader`
    pub fn new(loader: &'a dyn ModuleLoader) -> Self {
        Self { loader }
    }

    /// Scan a top-level program.
    ///
    /// The program must declare at least one register and end with a halt.
    pub fn scan_program(&self, source: &Source) -> MachineResult<Program> {
        let program = self.scan(source, Mode::TopLevel)?;

        if program.registers.declared_count() == 0 {
            return Err(integrity_error(
                "Program must declare at least one register.",
                &source.last_line(),
            ));
        }
        if !program.ends_with_halt() {
            return Err(integrity_error(
                "Program must end with a halt instruction.",
                &source.last_line(),
            ));
        }

        Ok(program)
    }

    /// Scan a module, binding `arguments` to its declarations in order.
    ///
    /// The literal value of a declaration is ignored while arguments remain.
    pub fn scan_module(&self, source: &Source, arguments: &[i64]) -> MachineResult<Program> {
        self.scan(
            source,
            Mode::Module {
                arguments: arguments.iter(),
                expected: arguments.len(),
            },
        )
    }

    fn scan(&self, source: &Source, mut mode: Mode<'_>) -> MachineResult<Program> {
        let mut program = Program::default();

        for line in &source.lines {
            let tokens = line.tokens();
            let Some(&first) = tokens.first() else {
                continue;
            };

            if first == Mnemonic::DECLARE {
                let value = self.declaration_value(line, &tokens, &program.registers, &mut mode)?;
                program.registers.declare(value);
            } else if Mnemonic::from_token(first).is_some() {
                let instruction = Instruction::from_tokens(&tokens, line)?;
                if let Opcode::Call(call) = &instruction.opcode {
                    self.check_call(call, &program.registers, line)?;
                }
                program.emit(instruction);
            } else {
                tracing::trace!(location = %line, text = %line.text, "line ignored");
            }
        }

        if let Mode::Module { expected, .. } = mode {
            if expected > program.registers.declared_count() {
                return Err(module_call_error(
                    ErrorKind::ModuleArgError,
                    format!(
                        "Module declares {} registers but was called with {} arguments.",
                        program.registers.declared_count(),
                        expected
                    ),
                    &source.last_line(),
                ));
            }
        }

        tracing::debug!(
            source = %source.name,
            registers = program.registers.len(),
            instructions = program.instruction_count(),
            "program scanned"
        );
        Ok(program)
    }

    /// Validate an `R <id> <value>` line and return the register's initial value
    fn declaration_value(
        &self,
        line: &SourceLine,
        tokens: &[&str],
        registers: &RegisterFile,
        mode: &mut Mode<'_>,
    ) -> MachineResult<i64> {
        if tokens.len() != 3 {
            return Err(declaration_error(
                ErrorKind::SyntaxArity,
                "Wrong number of tokens. A declaration has 3 tokens.",
                line,
            ));
        }

        let id = tokens[1].parse::<i64>().map_err(|_| {
            declaration_error(ErrorKind::TypeError, "Register ids must be integers.", line)
        })?;

        let literal = || {
            tokens[2].parse::<i64>().map_err(|_| {
                declaration_error(
                    ErrorKind::TypeError,
                    "Register values must be integers.",
                    line,
                )
            })
        };

        let value = match mode {
            Mode::TopLevel => literal()?,
            Mode::Module { arguments, .. } => match arguments.next() {
                Some(&argument) => argument,
                None => literal()?,
            },
        };

        if usize::try_from(id).ok() != Some(registers.len()) {
            return Err(declaration_error(
                ErrorKind::OrderError,
                "Register ids must be declared in order, starting at 1.",
                line,
            ));
        }

        Ok(value)
    }

    /// Check a module call's arguments and that the module exists
    fn check_call(
        &self,
        call: &ModuleCall,
        registers: &RegisterFile,
        line: &SourceLine,
    ) -> MachineResult<()> {
        if let Some(arg) = call.arguments.iter().find(|arg| !registers.contains(**arg)) {
            return Err(module_call_error(
                ErrorKind::ModuleArgError,
                format!(
                    "Argument register {} is not declared; {} registers exist.",
                    arg,
                    registers.len()
                ),
                line,
            ));
        }

        if !self.loader.contains(&call.name) {
            return Err(module_call_error(
                ErrorKind::ModuleNotFound,
                format!(
                    "Module '{}' not found at {}.",
                    call.name,
                    self.loader.locate(&call.name)
                ),
                line,
            ));
        }

        Ok(())
    }
}
