//! Inline value inspection
//!
//! Re-reads a script's source, walks every statement in source order and
//! reports the current value of each bare name that appears either as a
//! whole expression statement or as an assignment target.
//!
//! ```text
//! source text → [parse] → statements → [Inspector] → Vec<Probe> → [render]
//!                                           ↑
//!                                      Environment
//! ```
//!
//! Candidates that are not bare names, the reserved probe name, and names
//! the environment does not bind are all skipped without output.

mod render;
mod visitor;

pub use render::{render_json, render_stanza, render_text};
pub use visitor::Inspector;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::script::{parse_statements, read_source};
use crate::symbol::DEFAULT_RESERVED_NAME;
use crate::Environment;

/// Default number of spaces before each value line.
pub const DEFAULT_INDENT: usize = 4;

/// One reported name and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Probe {
    /// The name as written
    pub name: String,

    /// Line of the name in the script (1-indexed)
    pub line: usize,

    /// Column of the name in the script (1-indexed)
    pub column: usize,

    /// The value's string representation
    pub value: String,
}

/// Options for running and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Spaces before each value line
    pub indent: usize,

    /// Name reserved for the probe slot
    pub reserved_name: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            reserved_name: DEFAULT_RESERVED_NAME.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Set the value indentation.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the reserved probe name.
    pub fn with_reserved_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_name = name.into();
        self
    }
}

/// Inspect source text against a live environment.
///
/// # Errors
///
/// Returns `ProbeError::Parse` if the source is malformed. Unbound names
/// are never an error.
pub fn inspect_source(source: &str, env: &Environment) -> Result<Vec<Probe>> {
    let stmts = parse_statements(source)?;
    Ok(Inspector::new(env).inspect(&stmts))
}

/// Read a script fresh from disk and inspect it.
///
/// # Errors
///
/// Returns `ProbeError::Io` if the file can't be read, or
/// `ProbeError::Parse` if it is malformed.
pub fn inspect_file(path: impl AsRef<Path>, env: &Environment) -> Result<Vec<Probe>> {
    let source = read_source(path.as_ref())?;
    inspect_source(&source, env)
}
