//! Assignment expression evaluation

use quote::ToTokens;

use crate::{Environment, EvalContext, EvalError, Value};

use super::path::simple_ident;
use super::{location_of, Evaluate};

/// `x = value` rebinds an existing mutable variable and yields `()`.
impl Evaluate for syn::ExprAssign {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let value = self.right.eval(env, ctx)?;

        match self.left.as_ref() {
            syn::Expr::Index(_) | syn::Expr::Field(_) => Err(EvalError::UnsupportedExpr {
                kind: "assignment through an index or field".to_string(),
                location: location_of(&self.left),
            }),
            target => {
                let ident = simple_ident(target).ok_or_else(|| EvalError::InvalidAssignTarget {
                    kind: target.to_token_stream().to_string(),
                    location: location_of(target),
                })?;
                env.assign(&ident.to_string(), value)?;
                Ok(Value::Unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindingMode;

    fn assign(src: &str, env: &mut Environment) -> Result<Value, EvalError> {
        let expr: syn::ExprAssign = syn::parse_str(src).unwrap();
        expr.eval(env, &EvalContext::default())
    }

    #[test]
    fn test_simple_assignment() {
        let mut env = Environment::new();
        env.define_with_mode("x", Value::Int(0), BindingMode::Mutable);

        assert_eq!(assign("x = 42", &mut env).unwrap(), Value::Unit);
        assert_eq!(env.get("x"), Some(&Value::Int(42)));
    }

    #[test]
    fn test_assignment_to_immutable_fails() {
        let mut env = Environment::new();
        env.define("x", Value::Int(0));

        assert!(assign("x = 42", &mut env).is_err());
        assert_eq!(env.get("x"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_assignment_to_undefined_fails() {
        let mut env = Environment::new();
        assert!(matches!(
            assign("x = 42", &mut env),
            Err(EvalError::Environment(_))
        ));
    }

    #[test]
    fn test_assignment_to_reserved_name_fills_probe_slot() {
        let mut env = Environment::new();
        assign("___x___ = 1", &mut env).unwrap();
        assert_eq!(env.probe(), Some(&Value::Int(1)));
        assert!(env.is_empty());
    }

    #[test]
    fn test_assignment_to_literal_is_invalid() {
        let mut env = Environment::new();
        assert!(matches!(
            assign("1 = 2", &mut env),
            Err(EvalError::InvalidAssignTarget { .. })
        ));
    }
}
