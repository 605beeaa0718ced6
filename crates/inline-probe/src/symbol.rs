//! Symbols: names as the environment sees them

use std::fmt;

/// Default spelling of the reserved probe name.
pub const DEFAULT_RESERVED_NAME: &str = "___x___";

/// A name after classification against the reserved probe name.
///
/// The probe slot is identified by this tag alone; code that needs to skip
/// it matches on `Symbol::Probe` instead of comparing strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// An ordinary script name
    Named(String),

    /// The reserved probe slot
    Probe,
}

impl Symbol {
    /// Classify `name` given the reserved spelling.
    pub fn classify(name: &str, reserved: &str) -> Self {
        if name == reserved {
            Symbol::Probe
        } else {
            Symbol::Named(name.to_string())
        }
    }

    /// The ordinary name, or `None` for the probe slot.
    pub fn name(&self) -> Option<&str> {
        match self {
            Symbol::Named(name) => Some(name),
            Symbol::Probe => None,
        }
    }

    /// Whether this is the probe slot.
    pub fn is_probe(&self) -> bool {
        matches!(self, Symbol::Probe)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Named(name) => write!(f, "{}", name),
            Symbol::Probe => write!(f, "<probe>"),
        }
    }
}
