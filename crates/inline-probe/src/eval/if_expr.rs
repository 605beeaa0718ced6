//! If and block expression evaluation

use crate::{Environment, EvalContext, EvalError, Value};

use super::stmt::eval_block;
use super::{location_of, Evaluate};

impl Evaluate for syn::ExprIf {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let cond = match self.cond.eval(env, ctx)? {
            Value::Bool(b) => b,
            other => {
                return Err(EvalError::TypeError {
                    message: format!(
                        "expected `bool` in if condition, found `{}`",
                        other.type_name()
                    ),
                    location: location_of(&self.cond),
                });
            }
        };

        if cond {
            eval_block(&self.then_branch, env, ctx)
        } else if let Some((_, else_branch)) = &self.else_branch {
            // `else if` arrives as a nested ExprIf, `else { }` as an ExprBlock
            else_branch.eval(env, ctx)
        } else {
            Ok(Value::Unit)
        }
    }
}

impl Evaluate for syn::ExprBlock {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        eval_block(&self.block, env, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(src: &str) -> Result<Value, EvalError> {
        let expr: syn::Expr = syn::parse_str(src).unwrap();
        expr.eval(&mut Environment::new(), &EvalContext::default())
    }

    #[test]
    fn test_if_else_chain() {
        assert_eq!(eval("if false { 1 } else if true { 2 } else { 3 }").unwrap(), Value::Int(2));
        assert_eq!(eval("if false { 1 }").unwrap(), Value::Unit);
    }

    #[test]
    fn test_if_condition_must_be_bool() {
        match eval("if 1 { 2 }").unwrap_err() {
            EvalError::TypeError { message, .. } => assert!(message.contains("i64")),
            other => panic!("Expected TypeError, got {:?}", other),
        }
    }
}
