//! Register file
//!
//! An ordered sequence of integer registers. Index 0 is the accumulator and
//! always exists; indices 1..N are declared by the program in order.

use crate::opcode::RegisterId;
use std::fmt;
use thiserror::Error;

/// Failure to access or update a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterAccessError {
    /// The register index is not in the file
    #[error("register {index} does not exist; {len} registers are declared")]
    OutOfBounds {
        /// Requested index
        index: usize,
        /// Number of registers in the file
        len: usize,
    },
    /// The update does not fit in the register
    #[error("register {index} overflowed")]
    Overflow {
        /// Register that overflowed
        index: usize,
    },
}

/// Register storage for one executing frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    values: Vec<i64>,
}

impl RegisterFile {
    /// Create a register file holding only the accumulator
    pub fn new() -> Self {
        Self { values: vec![0] }
    }

    /// Create a register file from explicit values, accumulator first.
    ///
    /// An empty vector still yields the accumulator.
    pub fn from_values(values: Vec<i64>) -> Self {
        if values.is_empty() {
            Self::new()
        } else {
            Self { values }
        }
    }

    /// Append a register and return its id
    pub fn declare(&mut self, value: i64) -> RegisterId {
        self.values.push(value);
        RegisterId(self.values.len() - 1)
    }

    /// Number of registers, accumulator included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the accumulator is always present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of registers declared beyond the accumulator
    pub fn declared_count(&self) -> usize {
        self.values.len() - 1
    }

    /// Whether the id names a register in this file
    pub fn contains(&self, id: RegisterId) -> bool {
        id.0 < self.values.len()
    }

    /// Read a register
    pub fn get(&self, id: RegisterId) -> Result<i64, RegisterAccessError> {
        self.values
            .get(id.0)
            .copied()
            .ok_or(RegisterAccessError::OutOfBounds {
                index: id.0,
                len: self.values.len(),
            })
    }

    /// Overwrite a register
    pub fn set(&mut self, id: RegisterId, value: i64) -> Result<(), RegisterAccessError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(id.0)
            .ok_or(RegisterAccessError::OutOfBounds { index: id.0, len })?;
        *slot = value;
        Ok(())
    }

    /// Add one to a register
    pub fn increment(&mut self, id: RegisterId) -> Result<i64, RegisterAccessError> {
        self.apply(id, 1)
    }

    /// Subtract one from a register; values below zero are allowed
    pub fn decrement(&mut self, id: RegisterId) -> Result<i64, RegisterAccessError> {
        self.apply(id, -1)
    }

    fn apply(&mut self, id: RegisterId, delta: i64) -> Result<i64, RegisterAccessError> {
        let value = self.get(id)?;
        let updated = value
            .checked_add(delta)
            .ok_or(RegisterAccessError::Overflow { index: id.0 })?;
        self.set(id, updated)?;
        Ok(updated)
    }

    /// Register values, accumulator first
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Consume the file into its values
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}
