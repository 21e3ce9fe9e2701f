//! Diagnostic block rendering.
//!
//! A diagnostic lists the active module call sites, the offending line and
//! every message, each prefixed with its location, between two delimiter
//! lines:
//!
//! ```text
//! --------------------------------------------------
//! <<< ERROR - main.lmp: 4 >>> . soma(1,2)
//! <<< ERROR - soma.lmm: 2 >>> R 2 x
//! <<< ERROR - soma.lmm: 2 >>> Register declaration error.
//! --------------------------------------------------
//! ```

use crate::{MachineError, SourceLine};
use std::fmt::Write;

/// Line that opens and closes a diagnostic block
pub const DELIMITER: &str = "--------------------------------------------------";

fn push_entry(out: &mut String, line: &SourceLine, text: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "<<< ERROR - {} >>> {}", line, text);
}

/// Render an error as a diagnostic block.
///
/// # Examples
///
/// ```
/// use core_types::{render_diagnostic, ErrorKind, MachineError, SourceLine};
///
/// let error = MachineError::new(ErrorKind::IntegrityError, SourceLine::new("a.lmp", 2, "+ 1"))
///     .with_message("Program must end with a halt instruction.");
/// let block = render_diagnostic(&error);
///
/// assert!(block.contains("<<< ERROR - a.lmp: 2 >>> + 1"));
/// ```
pub fn render_diagnostic(error: &MachineError) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');

    for call_site in &error.traceback {
        push_entry(&mut out, call_site, &call_site.text);
    }

    push_entry(&mut out, &error.line, &error.line.text);
    for message in &error.messages {
        push_entry(&mut out, &error.line, message);
    }

    out.push_str(DELIMITER);
    out.push('\n');
    out
}
