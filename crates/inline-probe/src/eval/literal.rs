//! Literal evaluation

use crate::{Environment, EvalContext, EvalError, Value};

use super::{location_of, Evaluate};

impl Evaluate for syn::ExprLit {
    fn eval(&self, _env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        eval_lit(&self.lit)
    }
}

/// Evaluate a literal to a Value.
pub fn eval_lit(lit: &syn::Lit) -> Result<Value, EvalError> {
    match lit {
        syn::Lit::Str(s) => Ok(Value::string(s.value())),
        syn::Lit::Char(c) => Ok(Value::Char(c.value())),
        syn::Lit::Bool(b) => Ok(Value::Bool(b.value)),
        syn::Lit::Byte(b) => Ok(Value::Int(i64::from(b.value()))),
        syn::Lit::Int(i) => eval_int_literal(i),
        syn::Lit::Float(f) => eval_float_literal(f),

        syn::Lit::ByteStr(_) => Err(unsupported("byte string literal", lit)),
        syn::Lit::CStr(_) => Err(unsupported("C string literal", lit)),
        _ => Err(unsupported("unknown literal", lit)),
    }
}

/// Evaluate an integer literal.
///
/// The suffix bounds the accepted range; the value is always widened
/// to `i64`.
fn eval_int_literal(lit: &syn::LitInt) -> Result<Value, EvalError> {
    int_literal(lit, false)
}

/// Evaluate `-<lit>` as a single literal so that `-9223372036854775808`
/// is in range.
pub(crate) fn eval_negated_int_literal(lit: &syn::LitInt) -> Result<Value, EvalError> {
    int_literal(lit, true)
}

fn int_literal(lit: &syn::LitInt, negate: bool) -> Result<Value, EvalError> {
    let overflow = || EvalError::IntegerOverflow {
        location: location_of(lit),
    };

    let (min, max) = match lit.suffix() {
        "" | "i64" | "isize" => (i128::from(i64::MIN), i128::from(i64::MAX)),
        "i8" => (i128::from(i8::MIN), i128::from(i8::MAX)),
        "i16" => (i128::from(i16::MIN), i128::from(i16::MAX)),
        "i32" => (i128::from(i32::MIN), i128::from(i32::MAX)),
        "i128" => (i128::MIN, i128::MAX),
        "u8" => (0, i128::from(u8::MAX)),
        "u16" => (0, i128::from(u16::MAX)),
        "u32" => (0, i128::from(u32::MAX)),
        "u64" | "usize" => (0, i128::from(u64::MAX)),
        "u128" => (0, i128::MAX),
        other => {
            return Err(EvalError::UnsupportedLiteral {
                kind: format!("integer with suffix `{}`", other),
                location: location_of(lit),
            })
        }
    };

    let magnitude = lit.base10_parse::<i128>().map_err(|_| overflow())?;
    let n = if negate { -magnitude } else { magnitude };
    if !(min..=max).contains(&n) {
        return Err(overflow());
    }
    i64::try_from(n).map(Value::Int).map_err(|_| overflow())
}

/// Evaluate a float literal; `f32` literals are widened.
fn eval_float_literal(lit: &syn::LitFloat) -> Result<Value, EvalError> {
    let invalid = |e: syn::Error| EvalError::TypeError {
        message: format!("invalid float literal: {}", e),
        location: location_of(lit),
    };

    match lit.suffix() {
        "f32" => lit
            .base10_parse::<f32>()
            .map(|n| Value::Float(f64::from(n)))
            .map_err(invalid),
        "f64" | "" => lit.base10_parse::<f64>().map(Value::Float).map_err(invalid),
        other => Err(EvalError::UnsupportedLiteral {
            kind: format!("float with suffix `{}`", other),
            location: location_of(lit),
        }),
    }
}

fn unsupported(kind: &str, lit: &syn::Lit) -> EvalError {
    EvalError::UnsupportedLiteral {
        kind: kind.to_string(),
        location: location_of(lit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(src: &str) -> Result<Value, EvalError> {
        let lit: syn::Lit = syn::parse_str(src).unwrap();
        eval_lit(&lit)
    }

    #[test]
    fn test_suffixed_integers_are_widened() {
        assert_eq!(lit("42u8").unwrap(), Value::Int(42));
        assert_eq!(lit("42usize").unwrap(), Value::Int(42));
        assert_eq!(lit("0x10").unwrap(), Value::Int(16));
    }

    #[test]
    fn test_suffix_bounds_range() {
        assert!(matches!(
            lit("300u8"),
            Err(EvalError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            lit("18446744073709551615u64"),
            Err(EvalError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_negated_literal_reaches_i64_min() {
        let lit: syn::LitInt = syn::parse_str("9223372036854775808").unwrap();
        assert_eq!(eval_negated_int_literal(&lit).unwrap(), Value::Int(i64::MIN));
        assert!(matches!(
            eval_int_literal(&lit),
            Err(EvalError::IntegerOverflow { .. })
        ));

        let lit: syn::LitInt = syn::parse_str("128i8").unwrap();
        assert_eq!(eval_negated_int_literal(&lit).unwrap(), Value::Int(-128));
    }

    #[test]
    fn test_f32_is_widened() {
        assert_eq!(lit("0.5f32").unwrap(), Value::Float(0.5));
    }

    #[test]
    fn test_byte_literal_is_integer() {
        assert_eq!(lit("b'a'").unwrap(), Value::Int(97));
    }

    #[test]
    fn test_byte_string_rejected() {
        match lit("b\"abc\"").unwrap_err() {
            EvalError::UnsupportedLiteral { kind, .. } => {
                assert_eq!(kind, "byte string literal")
            }
            other => panic!("Expected UnsupportedLiteral, got {:?}", other),
        }
    }
}
