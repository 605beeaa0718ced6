//! Evaluation context configuration

/// Default limit on nested blocks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on the element count of a `[value; len]` array.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 1 << 20;

/// Configuration passed through all evaluation calls.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum block nesting (stack overflow protection)
    pub max_depth: usize,

    /// Maximum length of a repeat array
    pub max_array_len: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Set the repeat-array length limit.
    pub fn with_max_array_len(mut self, max_array_len: usize) -> Self {
        self.max_array_len = max_array_len;
        self
    }
}
