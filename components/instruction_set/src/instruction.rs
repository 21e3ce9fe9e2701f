//! Instruction representation
//!
//! Contains the instruction structure and its construction from tokens.

use crate::opcode::{Mnemonic, ModuleCall, Opcode, RegisterId};
use core_types::{ErrorKind, MachineError, MachineResult, SourceLine};
use std::fmt;

/// A single validated instruction with its source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode for this instruction
    pub opcode: Opcode,
    /// Label that makes this instruction a jump target
    pub label: Option<String>,
    /// Line the instruction was scanned from
    pub source: SourceLine,
}

fn definition_error(kind: ErrorKind, line: &SourceLine, detail: &str) -> MachineError {
    MachineError::new(kind, line.clone())
        .with_message("Instruction definition error.")
        .with_message(detail.to_string())
}

impl Instruction {
    /// Create an instruction without a label
    pub fn new(opcode: Opcode, source: SourceLine) -> Self {
        Self {
            opcode,
            label: None,
            source,
        }
    }

    /// Create an instruction carrying a label
    pub fn with_label(opcode: Opcode, label: impl Into<String>, source: SourceLine) -> Self {
        Self {
            opcode,
            label: Some(label.into()),
            source,
        }
    }

    /// Build an instruction from the tokens of its source line
    pub fn from_line(line: &SourceLine) -> MachineResult<Self> {
        Self::from_tokens(&line.tokens(), line)
    }

    /// Build an instruction from already split tokens.
    ///
    /// `tokens[0]` must be an operation token. Instructions take an argument
    /// and an optional label; the halt instruction takes only an optional
    /// label, written either as `F <label>` or `F <ignored> <label>`.
    pub fn from_tokens(tokens: &[&str], line: &SourceLine) -> MachineResult<Self> {
        let mnemonic = tokens
            .first()
            .and_then(|token| Mnemonic::from_token(token))
            .ok_or_else(|| {
                definition_error(ErrorKind::SyntaxArity, line, "Unknown operation.")
            })?;

        if mnemonic == Mnemonic::Halt {
            let label = match tokens.len() {
                1 => None,
                2 => Some(tokens[1]),
                3 => Some(tokens[2]),
                _ => {
                    return Err(definition_error(
                        ErrorKind::SyntaxArity,
                        line,
                        "Wrong number of tokens. A halt takes at most a label.",
                    ))
                }
            };
            return Ok(Self {
                opcode: Opcode::Halt,
                label: label.map(str::to_string),
                source: line.clone(),
            });
        }

        let (argument, label) = match tokens.len() {
            2 => (tokens[1], None),
            3 => (tokens[1], Some(tokens[2].to_string())),
            n if n < 2 => {
                return Err(definition_error(
                    ErrorKind::SyntaxArity,
                    line,
                    "Wrong number of tokens. Fewer than 2 tokens.",
                ))
            }
            _ => {
                return Err(definition_error(
                    ErrorKind::SyntaxArity,
                    line,
                    "Wrong number of tokens. More than 3 tokens.",
                ))
            }
        };

        let register = || {
            argument.parse::<usize>().map(RegisterId).map_err(|_| {
                definition_error(
                    ErrorKind::TypeError,
                    line,
                    "Instruction argument must be an integer register index.",
                )
            })
        };

        let opcode = match mnemonic {
            Mnemonic::Incr => Opcode::Incr(register()?),
            Mnemonic::Decr => Opcode::Decr(register()?),
            Mnemonic::Test => Opcode::Test(register()?),
            Mnemonic::Print => Opcode::Print(register()?),
            Mnemonic::Jump => Opcode::Jump(argument.to_string()),
            Mnemonic::Call => Opcode::Call(ModuleCall::parse(argument, line)?),
            Mnemonic::Halt => Opcode::Halt,
        };

        Ok(Self {
            opcode,
            label,
            source: line.clone(),
        })
    }

    /// Whether this instruction is a jump target for `label`
    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        if let Some(label) = &self.label {
            write!(f, " [{}]", label)?;
        }
        Ok(())
    }
}
