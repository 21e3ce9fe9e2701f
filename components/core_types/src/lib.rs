//! Core source and error types for the register machine.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline: tagged source lines, the error taxonomy, and diagnostic
//! rendering.
//!
//! # Overview
//!
//! - [`SourceLine`] - One non-empty program line with its origin
//! - [`Source`] - A loaded program text
//! - [`MachineError`] - Errors with location, messages and traceback
//! - [`ErrorKind`] - Types of machine errors
//! - [`render_diagnostic`] - Formats an error as a diagnostic block
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, MachineError, SourceLine};
//!
//! let line = SourceLine::new("soma.lmp", 3, "R 3 0");
//! let error = MachineError::new(ErrorKind::OrderError, line)
//!     .with_message("Register declaration error.")
//!     .with_message("Register ids must be declared in order.");
//!
//! assert_eq!(error.kind, ErrorKind::OrderError);
//! assert_eq!(error.messages.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod diagnostic;
mod error;
mod source;

pub use diagnostic::{render_diagnostic, DELIMITER};
pub use error::{ErrorKind, MachineError, MachineResult};
pub use source::{Source, SourceLine};
