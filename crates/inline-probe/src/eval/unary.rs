//! Unary operation evaluation

use syn::spanned::Spanned;

use crate::error::SourceLocation;
use crate::{Environment, EvalContext, EvalError, Value};

use super::literal::eval_negated_int_literal;
use super::{location_of, Evaluate};

impl Evaluate for syn::ExprUnary {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let location = Some(SourceLocation::from_span(self.op.span()));
        if let (syn::UnOp::Neg(_), syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        })) = (&self.op, &*self.expr)
        {
            return eval_negated_int_literal(lit);
        }

        let operand = self.expr.eval(env, ctx)?;

        match &self.op {
            syn::UnOp::Neg(_) => eval_neg(operand, location),
            syn::UnOp::Not(_) => eval_not(operand, location),
            _ => Err(EvalError::UnsupportedExpr {
                kind: "dereference".to_string(),
                location: location_of(self),
            }),
        }
    }
}

fn eval_neg(operand: Value, location: Option<SourceLocation>) -> Result<Value, EvalError> {
    match operand {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { location }),
        Value::Float(n) => Ok(Value::Float(-n)),
        other => Err(EvalError::TypeError {
            message: format!("cannot apply unary operator `-` to type `{}`", other.type_name()),
            location,
        }),
    }
}

fn eval_not(operand: Value, location: Option<SourceLocation>) -> Result<Value, EvalError> {
    match operand {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        Value::Int(n) => Ok(Value::Int(!n)),
        other => Err(EvalError::TypeError {
            message: format!("cannot apply unary operator `!` to type `{}`", other.type_name()),
            location,
        }),
    }
}
