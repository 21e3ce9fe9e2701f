//! Opcodes for the register machine
//!
//! Defines the closed set of operations the scanner can produce.

use core_types::{ErrorKind, MachineError, MachineResult, SourceLine};
use std::fmt;

/// Register identifier (index into a register file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegisterId(pub usize);

impl RegisterId {
    /// The reserved accumulator register
    pub const ACCUMULATOR: RegisterId = RegisterId(0);

    /// Index of the register in its file
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-token operation names as they appear in program text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// `+`
    Incr,
    /// `-`
    Decr,
    /// `P`
    Jump,
    /// `C`
    Test,
    /// `E`
    Print,
    /// `.`
    Call,
    /// `F`
    Halt,
}

impl Mnemonic {
    /// Register declaration marker
    pub const DECLARE: &'static str = "R";

    /// Recognize an operation token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Mnemonic::Incr),
            "-" => Some(Mnemonic::Decr),
            "P" => Some(Mnemonic::Jump),
            "C" => Some(Mnemonic::Test),
            "E" => Some(Mnemonic::Print),
            "." => Some(Mnemonic::Call),
            "F" => Some(Mnemonic::Halt),
            _ => None,
        }
    }

    /// The token this mnemonic is written as
    pub fn token(self) -> &'static str {
        match self {
            Mnemonic::Incr => "+",
            Mnemonic::Decr => "-",
            Mnemonic::Jump => "P",
            Mnemonic::Test => "C",
            Mnemonic::Print => "E",
            Mnemonic::Call => ".",
            Mnemonic::Halt => "F",
        }
    }
}

/// Module invocation descriptor: `name(r1,r2,...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleCall {
    /// Module name, used to locate the module's program
    pub name: String,
    /// Caller registers passed as arguments, in order
    pub arguments: Vec<RegisterId>,
}

impl ModuleCall {
    /// Create a new module call descriptor
    pub fn new(name: impl Into<String>, arguments: Vec<RegisterId>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Parse a `name(r1,r2,...)` descriptor.
    ///
    /// Only the shape is checked here; register bounds and module existence
    /// depend on the scanning context.
    pub fn parse(descriptor: &str, line: &SourceLine) -> MachineResult<Self> {
        let fail = |detail: &str| {
            MachineError::new(ErrorKind::ModuleArgError, line.clone())
                .with_message("Module call error.")
                .with_message(detail.to_string())
        };

        let open = descriptor
            .find('(')
            .ok_or_else(|| fail("Module call must list its arguments in parentheses."))?;
        let inner = descriptor[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| fail("Module call argument list must end with ')'."))?;

        let name = &descriptor[..open];
        if name.is_empty() {
            return Err(fail("Module call must name a module."));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(fail("Module names may only contain letters, digits, '_' and '-'."));
        }

        if inner.trim().is_empty() {
            return Err(fail("Module call must pass at least one argument."));
        }

        let arguments = inner
            .split(',')
            .map(|arg| {
                arg.trim()
                    .parse::<usize>()
                    .map(RegisterId)
                    .map_err(|_| fail("Module call arguments must be register indices."))
            })
            .collect::<MachineResult<Vec<_>>>()?;

        Ok(Self::new(name, arguments))
    }
}

impl fmt::Display for ModuleCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|r| r.to_string()).collect();
        write!(f, "{}({})", self.name, args.join(","))
    }
}

/// Register machine opcodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opcode {
    /// Increment register
    Incr(RegisterId),
    /// Decrement register (may go negative)
    Decr(RegisterId),
    /// Jump to the first instruction carrying this label
    Jump(String),
    /// Execute the next instruction if the register is positive, skip it otherwise
    Test(RegisterId),
    /// Print the register's value
    Print(RegisterId),
    /// Run a module with the given registers as arguments
    Call(ModuleCall),
    /// Stop execution
    Halt,
}

impl Opcode {
    /// The mnemonic this opcode is written with
    pub fn mnemonic(&self) -> Mnemonic {
        match self {
            Opcode::Incr(_) => Mnemonic::Incr,
            Opcode::Decr(_) => Mnemonic::Decr,
            Opcode::Jump(_) => Mnemonic::Jump,
            Opcode::Test(_) => Mnemonic::Test,
            Opcode::Print(_) => Mnemonic::Print,
            Opcode::Call(_) => Mnemonic::Call,
            Opcode::Halt => Mnemonic::Halt,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.mnemonic().token();
        match self {
            Opcode::Incr(r) | Opcode::Decr(r) | Opcode::Test(r) | Opcode::Print(r) => {
                write!(f, "{} {}", token, r)
            }
            Opcode::Jump(label) => write!(f, "{} {}", token, label),
            Opcode::Call(call) => write!(f, "{} {}", token, call),
            Opcode::Halt => f.write_str(token),
        }
    }
}
