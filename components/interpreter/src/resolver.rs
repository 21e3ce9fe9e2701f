//! Module resolution - runs a module call to completion
//!
//! A call copies the caller's argument registers into the module's declared
//! registers, scans and runs the module on its own register file, then copies
//! the module's accumulator and argument registers back into the caller's
//! registers at the same positions.

use core_types::{ErrorKind, MachineError, MachineResult, Source, SourceLine};
use instruction_set::{ModuleCall, RegisterFile, RegisterId};
use scanner::Scanner;

use crate::call_frame::CallFrame;
use crate::context::ExecutionContext;
use crate::dispatch::{register_error, Dispatcher};

impl<'a> Dispatcher<'a> {
    /// Execute `call` and write its results back into `registers`
    pub fn invoke_module(
        &mut self,
        call: &ModuleCall,
        registers: &mut RegisterFile,
        call_site: &SourceLine,
    ) -> MachineResult<()> {
        if self.call_stack.len() >= self.config.max_call_depth {
            return Err(MachineError::new(ErrorKind::CallDepthExceeded, call_site.clone())
                .with_message("Module call error.")
                .with_message(format!(
                    "Module calls nested deeper than {} levels.",
                    self.config.max_call_depth
                )));
        }

        let arguments = call
            .arguments
            .iter()
            .map(|register| registers.get(*register))
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|e| register_error(e, call_site))?;

        let source = self.load_module(&call.name, call_site)?;

        tracing::debug!(
            module = %call.name,
            depth = self.call_stack.len() + 1,
            ?arguments,
            "module call"
        );
        self.call_stack.push(CallFrame::new(call.name.clone(), call_site.clone()));
        let result = self
            .run_module(&source, &arguments)
            .map_err(|e| e.or_traceback(|| self.traceback()));
        self.call_stack.pop();
        let callee = result?;
        tracing::debug!(module = %call.name, registers = %callee, "module returned");

        let accumulator = callee
            .get(RegisterId::ACCUMULATOR)
            .map_err(|e| register_error(e, call_site))?;
        registers
            .set(RegisterId::ACCUMULATOR, accumulator)
            .map_err(|e| register_error(e, call_site))?;

        for (position, target) in call.arguments.iter().enumerate() {
            let value = callee
                .get(RegisterId(position + 1))
                .map_err(|e| register_error(e, call_site))?;
            registers
                .set(*target, value)
                .map_err(|e| register_error(e, call_site))?;
        }

        Ok(())
    }

    fn load_module(&self, name: &str, call_site: &SourceLine) -> MachineResult<Source> {
        self.loader.load(name).map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorKind::ModuleNotFound
            } else {
                ErrorKind::Io
            };
            MachineError::new(kind, call_site.clone())
                .with_message("Module call error.")
                .with_message(format!(
                    "Could not load module '{}' from {}: {}",
                    name,
                    self.loader.locate(name),
                    e
                ))
        })
    }

    fn run_module(&mut self, source: &Source, arguments: &[i64]) -> MachineResult<RegisterFile> {
        let program = Scanner::new(self.loader).scan_module(source, arguments)?;
        let mut ctx = ExecutionContext::new(program, source.last_line());
        self.execute(&mut ctx)?;
        Ok(ctx.registers)
    }
}
