//! # inline-probe
//!
//! Runs a small script written in Rust statement syntax, then re-reads the
//! script from disk and prints the value of every bare name it mentions,
//! for display next to the source in an editor.
//!
//! ## Architecture
//!
//! - **Script**: parse source into `syn` statements and run them
//! - **Evaluator**: tree-walking evaluation over the `syn` AST
//! - **Environment**: the symbol table the script leaves behind
//! - **Inspector**: walk the source again and resolve each bare name
//!
//! ## Example
//!
//! ```
//! use inline_probe::{inspect_source, render_text, EvalContext, Environment, Script};
//!
//! let source = "let a = 3;\nlet b = 4;\nlet c = 5;\nc;";
//! let mut env = Environment::new();
//! Script::parse(source).unwrap().run(&mut env, &EvalContext::default()).unwrap();
//!
//! let probes = inspect_source(source, &env).unwrap();
//! let mut out = Vec::new();
//! render_text(&probes, 4, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "a:\n    3\nb:\n    4\nc:\n    5\nc:\n    5\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod inspect;
pub mod script;
pub mod symbol;
pub mod value;

// Re-export main types
pub use context::{EvalContext, DEFAULT_MAX_ARRAY_LEN, DEFAULT_MAX_DEPTH};
pub use environment::{Binding, BindingMode, Environment, ScopeGuard};
pub use error::{EnvironmentError, EvalError, ProbeError, Result, SourceLocation};
pub use eval::{eval_block, eval_expr, Evaluate};
pub use inspect::{
    inspect_file, inspect_source, render_json, render_stanza, render_text, Inspector, Probe,
    ProbeConfig, DEFAULT_INDENT,
};
pub use script::{run_and_inspect, Script};
pub use symbol::{Symbol, DEFAULT_RESERVED_NAME};
pub use value::{FunctionValue, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
