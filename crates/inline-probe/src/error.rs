//! Error types for script evaluation and inspection

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Line/column position in a script (both 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the start of a span.
    ///
    /// `proc_macro2` reports columns 0-indexed; they are shifted here.
    pub fn from_span(span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            line: start.line,
            column: start.column + 1,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised by the environment (symbol table).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    /// Assignment to a name that was never bound
    #[error("cannot find value `{name}` in this scope")]
    UndefinedVariable {
        /// The missing name
        name: String,
    },

    /// Assignment to a binding declared without `mut`
    #[error("cannot assign twice to immutable variable `{name}`")]
    ImmutableBinding {
        /// The binding's name
        name: String,
    },
}

/// Errors raised while evaluating a script.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Read of a name that is not bound
    #[error("cannot find value `{name}` in this scope")]
    UndefinedVariable {
        /// The missing name
        name: String,
        /// Where it was referenced
        location: Option<SourceLocation>,
    },

    /// Operand or condition of the wrong type
    #[error("type error: {message}")]
    TypeError {
        /// What went wrong
        message: String,
        /// Where it went wrong
        location: Option<SourceLocation>,
    },

    /// Binary operator applied to operands it does not support
    #[error("cannot apply `{op}` to `{left_type}` and `{right_type}`")]
    InvalidBinaryOperands {
        /// Operator text
        op: String,
        /// Left operand type
        left_type: String,
        /// Right operand type
        right_type: String,
        /// Operator position
        location: Option<SourceLocation>,
    },

    /// Integer division or remainder by zero
    #[error("attempt to divide by zero")]
    DivisionByZero {
        /// Operator position
        location: Option<SourceLocation>,
    },

    /// Integer arithmetic or literal out of range
    #[error("integer overflow")]
    IntegerOverflow {
        /// Operator or literal position
        location: Option<SourceLocation>,
    },

    /// Syntax the evaluator does not execute
    #[error("unsupported expression: {kind}")]
    UnsupportedExpr {
        /// Description of the construct
        kind: String,
        /// Where it appeared
        location: Option<SourceLocation>,
    },

    /// Literal kind the evaluator does not support
    #[error("unsupported literal: {kind}")]
    UnsupportedLiteral {
        /// Description of the literal
        kind: String,
        /// Where it appeared
        location: Option<SourceLocation>,
    },

    /// Left-hand side of `=` that is not a variable
    #[error("invalid left-hand side of assignment: {kind}")]
    InvalidAssignTarget {
        /// Description of the target
        kind: String,
        /// Where it appeared
        location: Option<SourceLocation>,
    },

    /// `let` pattern that did not match its value
    #[error("refutable pattern in local binding: {pattern}")]
    RefutablePattern {
        /// Pattern source text
        pattern: String,
        /// Where it appeared
        location: Option<SourceLocation>,
    },

    /// Index past the end of an array or tuple
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds {
        /// Requested index
        index: i64,
        /// Collection length
        len: usize,
        /// Where it appeared
        location: Option<SourceLocation>,
    },

    /// Repeat array longer than the configured limit
    #[error("array of length {len} exceeds maximum length of {max}")]
    ArrayTooLarge {
        /// Requested length
        len: i64,
        /// Configured limit
        max: usize,
        /// Where the length appeared
        location: Option<SourceLocation>,
    },

    /// Blocks nested deeper than the configured limit
    #[error("block nesting exceeds maximum depth of {max}")]
    DepthExceeded {
        /// Configured limit
        max: usize,
    },

    /// Error from the environment
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

impl EvalError {
    /// Source location attached to this error, if any.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            EvalError::UndefinedVariable { location, .. }
            | EvalError::TypeError { location, .. }
            | EvalError::InvalidBinaryOperands { location, .. }
            | EvalError::DivisionByZero { location }
            | EvalError::IntegerOverflow { location }
            | EvalError::UnsupportedExpr { location, .. }
            | EvalError::UnsupportedLiteral { location, .. }
            | EvalError::InvalidAssignTarget { location, .. }
            | EvalError::RefutablePattern { location, .. }
            | EvalError::IndexOutOfBounds { location, .. }
            | EvalError::ArrayTooLarge { location, .. } => *location,
            EvalError::DepthExceeded { .. } | EvalError::Environment(_) => None,
        }
    }
}

/// Errors from the load/run/inspect pipeline.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Reading the script failed
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        /// Script path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The script is not valid statement syntax
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Line (1-indexed)
        line: usize,
        /// Column (1-indexed)
        column: usize,
        /// Parser message
        message: String,
    },

    /// Evaluating the script failed
    #[error("evaluation failed{}: {source}", at_location(.source))]
    Eval {
        /// Underlying evaluation error
        #[from]
        source: EvalError,
    },

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    /// Serializing the JSON report failed
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<syn::Error> for ProbeError {
    fn from(err: syn::Error) -> Self {
        let location = SourceLocation::from_span(err.span());
        ProbeError::Parse {
            line: location.line,
            column: location.column,
            message: err.to_string(),
        }
    }
}

fn at_location(err: &EvalError) -> String {
    err.location()
        .map(|loc| format!(" at {}", loc))
        .unwrap_or_default()
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse::Parser;

    #[test]
    fn test_eval_error_display_includes_location() {
        let err = ProbeError::from(EvalError::DivisionByZero {
            location: Some(SourceLocation::new(3, 9)),
        });
        assert_eq!(
            err.to_string(),
            "evaluation failed at 3:9: attempt to divide by zero"
        );
    }

    #[test]
    fn test_eval_error_display_without_location() {
        let err = ProbeError::from(EvalError::DepthExceeded { max: 2 });
        assert_eq!(
            err.to_string(),
            "evaluation failed: block nesting exceeds maximum depth of 2"
        );
    }

    #[test]
    fn test_syn_error_converts_to_parse() {
        let err = syn::Block::parse_within
            .parse_str("let = ;")
            .map(|_| ())
            .unwrap_err();
        match ProbeError::from(err) {
            ProbeError::Parse { line, .. } => assert_eq!(line, 1),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }
}
