//! Call frame for module call stack management

use core_types::SourceLine;

/// Call frame representing an active module invocation
///
/// Stored on the call stack while the module runs; the call sites of all
/// frames form the traceback of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the module being executed
    pub module: String,
    /// The call instruction's line in the caller
    pub call_site: SourceLine,
}

impl CallFrame {
    /// Create a new call frame
    pub fn new(module: impl Into<String>, call_site: SourceLine) -> Self {
        Self {
            module: module.into(),
            call_site,
        }
    }
}
