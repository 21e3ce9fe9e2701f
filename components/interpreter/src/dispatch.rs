//! Dispatch loop for program execution
//!
//! Runs one frame's instructions until a halt. Module calls re-enter the
//! loop recursively through [`Dispatcher::invoke_module`](crate::resolver).

use core_types::{ErrorKind, MachineError, MachineResult, SourceLine};
use instruction_set::{Opcode, RegisterAccessError};
use scanner::ModuleLoader;
use std::io::Write;

use crate::call_frame::CallFrame;
use crate::config::RunConfig;
use crate::context::ExecutionContext;

/// Dispatch handler for executing programs
pub struct Dispatcher<'a> {
    /// Settings for this run
    pub(crate) config: &'a RunConfig,
    /// Where module programs come from
    pub(crate) loader: &'a dyn ModuleLoader,
    /// Sink for printed registers and debug lines
    out: &'a mut dyn Write,
    /// Active module calls, outermost first
    pub(crate) call_stack: Vec<CallFrame>,
    /// Instructions executed so far, across all frames
    steps: u64,
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("out", &"dyn Write")
            .field("call_stack", &self.call_stack)
            .field("steps", &self.steps)
            .finish()
    }
}

/// Convert a register access failure at `line` into a machine error
pub(crate) fn register_error(error: RegisterAccessError, line: &SourceLine) -> MachineError {
    let kind = match error {
        RegisterAccessError::OutOfBounds { .. } => ErrorKind::RegisterOutOfBounds,
        RegisterAccessError::Overflow { .. } => ErrorKind::RegisterOverflow,
    };
    MachineError::new(kind, line.clone())
        .with_message("Register access error.")
        .with_message(error.to_string())
}

fn output_error(error: std::io::Error, line: &SourceLine) -> MachineError {
    MachineError::new(ErrorKind::Io, line.clone())
        .with_message("Could not write output.")
        .with_message(error.to_string())
}

impl<'a> Dispatcher<'a> {
    /// Create a new dispatcher
    pub fn new(config: &'a RunConfig, loader: &'a dyn ModuleLoader, out: &'a mut dyn Write) -> Self {
        Self {
            config,
            loader,
            out,
            call_stack: Vec::new(),
            steps: 0,
        }
    }

    /// Number of instructions executed so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current module call depth
    pub fn depth(&self) -> usize {
        self.call_stack.len()
    }

    /// Call sites of the active module calls, outermost first
    pub fn traceback(&self) -> Vec<SourceLine> {
        self.call_stack
            .iter()
            .map(|frame| frame.call_site.clone())
            .collect()
    }

    /// Run the context until a halt instruction.
    ///
    /// On success the context's register file holds the final state.
    pub fn execute(&mut self, ctx: &mut ExecutionContext) -> MachineResult<()> {
        loop {
            let Some(instruction) = ctx.instructions.get(ctx.program_counter) else {
                return Err(MachineError::new(ErrorKind::ProgramCounterOutOfBounds, ctx.end_line.clone())
                    .with_message("Execution error.")
                    .with_message(format!(
                        "Execution reached instruction {} but the program has {}; it must end with a halt.",
                        ctx.program_counter,
                        ctx.instructions.len()
                    )));
            };
            let line = &instruction.source;

            self.steps += 1;
            if let Some(limit) = self.config.max_steps {
                if self.steps > limit {
                    return Err(MachineError::new(ErrorKind::StepLimitExceeded, line.clone())
                        .with_message("Execution error.")
                        .with_message(format!("Step limit of {} instructions exceeded.", limit)));
                }
            }

            if self.config.debug {
                writeln!(
                    self.out,
                    "Depurando::: Registradores: {} --- Comando: {}",
                    ctx.registers, instruction
                )
                .map_err(|e| output_error(e, line))?;
            }
            tracing::trace!(
                depth = self.call_stack.len(),
                pc = ctx.program_counter,
                instruction = %instruction,
                "step"
            );

            match &instruction.opcode {
                Opcode::Halt => return Ok(()),
                Opcode::Incr(register) => {
                    ctx.registers
                        .increment(*register)
                        .map_err(|e| register_error(e, line))?;
                    ctx.program_counter += 1;
                }
                Opcode::Decr(register) => {
                    ctx.registers
                        .decrement(*register)
                        .map_err(|e| register_error(e, line))?;
                    ctx.program_counter += 1;
                }
                Opcode::Jump(label) => {
                    ctx.program_counter = ctx.find_label(label).ok_or_else(|| {
                        MachineError::new(ErrorKind::LabelNotFound, line.clone())
                            .with_message("Jump error.")
                            .with_message(format!("No instruction carries the label '{}'.", label))
                    })?;
                }
                Opcode::Test(register) => {
                    let value = ctx
                        .registers
                        .get(*register)
                        .map_err(|e| register_error(e, line))?;
                    ctx.program_counter += if value > 0 { 1 } else { 2 };
                }
                Opcode::Print(register) => {
                    let value = ctx
                        .registers
                        .get(*register)
                        .map_err(|e| register_error(e, line))?;
                    writeln!(self.out, "Registrador {}: {}", register, value)
                        .map_err(|e| output_error(e, line))?;
                    ctx.program_counter += 1;
                }
                Opcode::Call(call) => {
                    self.invoke_module(call, &mut ctx.registers, line)?;
                    ctx.program_counter += 1;
                }
            }
        }
    }
}
