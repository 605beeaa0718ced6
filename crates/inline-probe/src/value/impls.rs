//! Value constructors, predicates, extractors and From impls

use std::sync::Arc;

use super::*;

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    /// Create a tuple value
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Arc::new(items))
    }

    /// Rust-style name of this value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "()",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "i64",
            Value::Float(_) => "f64",
            Value::String(_) => "String",
            Value::Array(_) => "array",
            Value::Tuple(_) => "tuple",
            Value::Function(_) => "fn item",
        }
    }

    /// Check if value is unit type
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from("x"), Value::string("x"));
        assert_eq!(Value::from(()), Value::Unit);
        assert_eq!(Value::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(1).type_name(), "i64");
        assert_eq!(Value::string("").type_name(), "String");
        assert_eq!(Value::tuple(vec![]).type_name(), "tuple");
    }

    #[test]
    fn test_extractors_reject_other_types() {
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(Value::string("1").as_int(), None);
        assert!(Value::Unit.is_unit());
    }
}
