//! Run configuration passed to the VM entry point

/// Default bound on nested module calls
///
/// Every nesting level recurses through the dispatch loop, so the bound
/// must fit on a 2 MB thread stack in unoptimized builds.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Write a trace line with the registers and instruction before every step
    pub debug: bool,
    /// Maximum number of nested module calls
    pub max_call_depth: usize,
    /// Maximum number of executed instructions across all frames, if any
    pub max_steps: Option<u64>,
}

impl RunConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable step tracing
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the module call depth bound
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Set or clear the step bound
    pub fn with_max_steps(mut self, steps: Option<u64>) -> Self {
        self.max_steps = steps;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_steps: None,
        }
    }
}
