//! Arrays, tuples, indexing and tuple fields

use quote::ToTokens;

use crate::error::SourceLocation;
use crate::{Environment, EvalContext, EvalError, Value};

use super::{location_of, Evaluate};

impl Evaluate for syn::ExprArray {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let items = self
            .elems
            .iter()
            .map(|elem| elem.eval(env, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::array(items))
    }
}

/// `[value; len]`
impl Evaluate for syn::ExprRepeat {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let value = self.expr.eval(env, ctx)?;
        let location = location_of(&self.len);
        let len = match self.len.eval(env, ctx)? {
            Value::Int(n) if n >= 0 => match usize::try_from(n) {
                Ok(len) if len <= ctx.max_array_len => len,
                _ => {
                    return Err(EvalError::ArrayTooLarge {
                        len: n,
                        max: ctx.max_array_len,
                        location,
                    })
                }
            },
            other => {
                return Err(EvalError::TypeError {
                    message: format!(
                        "array length must be a non-negative integer, found `{}`",
                        other
                    ),
                    location,
                })
            }
        };
        Ok(Value::array(vec![value; len]))
    }
}

/// `()` is unit; anything else is a tuple.
impl Evaluate for syn::ExprTuple {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        if self.elems.is_empty() {
            return Ok(Value::Unit);
        }
        let items = self
            .elems
            .iter()
            .map(|elem| elem.eval(env, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::tuple(items))
    }
}

impl Evaluate for syn::ExprIndex {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let base = self.expr.eval(env, ctx)?;
        let index = self.index.eval(env, ctx)?;
        let location = location_of(&self.index);

        match (&base, &index) {
            (Value::Array(items), Value::Int(i)) => element(items, *i, location),
            (Value::Array(_), other) => Err(EvalError::TypeError {
                message: format!("array index must be an integer, found `{}`", other.type_name()),
                location,
            }),
            _ => Err(EvalError::TypeError {
                message: format!("cannot index into a value of type `{}`", base.type_name()),
                location,
            }),
        }
    }
}

/// Tuple field access `t.0`; named fields are not supported.
impl Evaluate for syn::ExprField {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let base = self.base.eval(env, ctx)?;
        let location = location_of(&self.member);

        match (&base, &self.member) {
            (Value::Tuple(items), syn::Member::Unnamed(index)) => {
                element(items, i64::from(index.index), location)
            }
            (_, syn::Member::Named(name)) => Err(EvalError::UnsupportedExpr {
                kind: format!("field access `.{}`", name),
                location,
            }),
            (other, member) => Err(EvalError::TypeError {
                message: format!(
                    "no field `{}` on type `{}`",
                    member.to_token_stream(),
                    other.type_name()
                ),
                location,
            }),
        }
    }
}

fn element(
    items: &[Value],
    index: i64,
    location: Option<SourceLocation>,
) -> Result<Value, EvalError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or(EvalError::IndexOutOfBounds {
            index,
            len: items.len(),
            location,
        })
}
