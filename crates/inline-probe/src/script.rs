//! Loading and running script files

use std::fs;
use std::path::Path;

use syn::parse::Parser;
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};
use crate::eval::eval_stmt;
use crate::inspect::{inspect_file, Probe, ProbeConfig};
use crate::{Environment, EvalContext, Value};

/// A parsed script: a sequence of Rust statements at top level.
#[derive(Debug, Clone)]
pub struct Script {
    stmts: Vec<syn::Stmt>,
}

impl Script {
    /// Parse script source text.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Parse` for malformed source.
    pub fn parse(source: &str) -> Result<Self> {
        let stmts = parse_statements(source)?;
        Ok(Self { stmts })
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Io` if the file can't be read, or
    /// `ProbeError::Parse` for malformed source.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = read_source(path.as_ref())?;
        Self::parse(&source)
    }

    /// Number of top-level statements.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Whether the script has no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Evaluate every statement at global scope, in order.
    ///
    /// Returns the value of a trailing expression without semicolon, or
    /// unit.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Eval` for the first failing statement.
    pub fn run(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value> {
        let mut last_value = Value::Unit;
        for (index, stmt) in self.stmts.iter().enumerate() {
            trace!(index, "evaluating statement");
            last_value = eval_stmt(stmt, env, ctx)?;
        }
        debug!(
            statements = self.stmts.len(),
            bindings = env.len(),
            "script finished"
        );
        Ok(last_value)
    }
}

/// Parse source text into top-level statements.
pub(crate) fn parse_statements(source: &str) -> Result<Vec<syn::Stmt>> {
    Ok(syn::Block::parse_within.parse_str(source)?)
}

/// Read a script file from disk.
///
/// # Errors
///
/// Returns `ProbeError::Io` carrying the path.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ProbeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a script file, then re-read it from disk and inspect it against
/// the resulting scope.
///
/// # Errors
///
/// Any load, parse or evaluation failure is fatal and produces no probes.
pub fn run_and_inspect(
    path: impl AsRef<Path>,
    config: &ProbeConfig,
    ctx: &EvalContext,
) -> Result<Vec<Probe>> {
    let path = path.as_ref();
    let script = Script::load(path)?;
    debug!(path = %path.display(), statements = script.len(), "script loaded");

    let mut env = Environment::with_reserved_name(config.reserved_name.as_str());
    script.run(&mut env, ctx)?;

    inspect_file(path, &env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalError;

    #[test]
    fn test_parse_counts_statements() {
        let script = Script::parse("let a = 1;\nlet b = 2;\na;").unwrap();
        assert_eq!(script.len(), 3);
        assert!(!script.is_empty());
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(Script::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        match Script::parse("let a = 1;\nlet = ;").unwrap_err() {
            ProbeError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_run_returns_trailing_value() {
        let script = Script::parse("let a = 20;\nlet b = 22;\na + b").unwrap();
        let mut env = Environment::new();

        let value = script.run(&mut env, &EvalContext::default()).unwrap();
        assert_eq!(value, Value::Int(42));
        assert_eq!(env.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let script = Script::parse("let a = 1;\nmissing;\nlet b = 2;").unwrap();
        let mut env = Environment::new();

        match script.run(&mut env, &EvalContext::default()).unwrap_err() {
            ProbeError::Eval {
                source: EvalError::UndefinedVariable { name, location },
            } => {
                assert_eq!(name, "missing");
                assert_eq!(location.map(|l| l.line), Some(2));
            }
            other => panic!("Expected Eval, got {:?}", other),
        }
        assert!(env.get("b").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        match Script::load("/nonexistent/probe-script.rs").unwrap_err() {
            ProbeError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/probe-script.rs"))
            }
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}
