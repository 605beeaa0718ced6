//! Binary operation evaluation

use std::cmp::Ordering;

use quote::ToTokens;
use syn::spanned::Spanned;

use crate::error::SourceLocation;
use crate::{Environment, EvalContext, EvalError, Value};

use super::path::simple_ident;
use super::{location_of, Evaluate};

/// Binary operators after stripping the compound-assignment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::BitAnd => "&",
            Op::BitOr => "|",
            Op::BitXor => "^",
            Op::Shl => "<<",
            Op::Shr => ">>",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }
}

/// Map a syn operator to `(op, is_compound_assignment)`.
///
/// `&&` and `||` are not listed; they short-circuit and are handled first.
fn classify(op: &syn::BinOp) -> Option<(Op, bool)> {
    let classified = match op {
        syn::BinOp::Add(_) => (Op::Add, false),
        syn::BinOp::Sub(_) => (Op::Sub, false),
        syn::BinOp::Mul(_) => (Op::Mul, false),
        syn::BinOp::Div(_) => (Op::Div, false),
        syn::BinOp::Rem(_) => (Op::Rem, false),
        syn::BinOp::BitAnd(_) => (Op::BitAnd, false),
        syn::BinOp::BitOr(_) => (Op::BitOr, false),
        syn::BinOp::BitXor(_) => (Op::BitXor, false),
        syn::BinOp::Shl(_) => (Op::Shl, false),
        syn::BinOp::Shr(_) => (Op::Shr, false),
        syn::BinOp::Eq(_) => (Op::Eq, false),
        syn::BinOp::Ne(_) => (Op::Ne, false),
        syn::BinOp::Lt(_) => (Op::Lt, false),
        syn::BinOp::Le(_) => (Op::Le, false),
        syn::BinOp::Gt(_) => (Op::Gt, false),
        syn::BinOp::Ge(_) => (Op::Ge, false),
        syn::BinOp::AddAssign(_) => (Op::Add, true),
        syn::BinOp::SubAssign(_) => (Op::Sub, true),
        syn::BinOp::MulAssign(_) => (Op::Mul, true),
        syn::BinOp::DivAssign(_) => (Op::Div, true),
        syn::BinOp::RemAssign(_) => (Op::Rem, true),
        syn::BinOp::BitAndAssign(_) => (Op::BitAnd, true),
        syn::BinOp::BitOrAssign(_) => (Op::BitOr, true),
        syn::BinOp::BitXorAssign(_) => (Op::BitXor, true),
        syn::BinOp::ShlAssign(_) => (Op::Shl, true),
        syn::BinOp::ShrAssign(_) => (Op::Shr, true),
        _ => return None,
    };
    Some(classified)
}

impl Evaluate for syn::ExprBinary {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let location = Some(SourceLocation::from_span(self.op.span()));

        match &self.op {
            syn::BinOp::And(_) => return eval_logical(self, false, env, ctx),
            syn::BinOp::Or(_) => return eval_logical(self, true, env, ctx),
            _ => {}
        }

        let (op, compound) = classify(&self.op).ok_or_else(|| EvalError::UnsupportedExpr {
            kind: "unknown binary operator".to_string(),
            location,
        })?;

        let left = self.left.eval(env, ctx)?;
        let right = self.right.eval(env, ctx)?;
        let result = apply(op, left, right, location)?;

        if !compound {
            return Ok(result);
        }

        // x op= y  →  x = x op y
        let target = simple_ident(&self.left).ok_or_else(|| EvalError::InvalidAssignTarget {
            kind: format!("compound assignment to `{}`", self.left.to_token_stream()),
            location: location_of(&self.left),
        })?;
        env.assign(&target.to_string(), result)?;
        Ok(Value::Unit)
    }
}

/// Short-circuit `&&` (`stop_on == false`) and `||` (`stop_on == true`).
fn eval_logical(
    binary: &syn::ExprBinary,
    stop_on: bool,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let op = if stop_on { "||" } else { "&&" };
    let location = Some(SourceLocation::from_span(binary.op.span()));

    let left = binary.left.eval(env, ctx)?;
    match left {
        Value::Bool(b) if b == stop_on => Ok(Value::Bool(b)),
        Value::Bool(_) => match binary.right.eval(env, ctx)? {
            Value::Bool(b) => Ok(Value::Bool(b)),
            other => Err(EvalError::InvalidBinaryOperands {
                op: op.to_string(),
                left_type: "bool".to_string(),
                right_type: other.type_name().to_string(),
                location,
            }),
        },
        other => Err(EvalError::InvalidBinaryOperands {
            op: op.to_string(),
            left_type: other.type_name().to_string(),
            right_type: "?".to_string(),
            location,
        }),
    }
}

fn apply(
    op: Op,
    left: Value,
    right: Value,
    location: Option<SourceLocation>,
) -> Result<Value, EvalError> {
    match op {
        Op::Eq => return Ok(Value::Bool(left == right)),
        Op::Ne => return Ok(Value::Bool(left != right)),
        Op::Lt | Op::Le | Op::Gt | Op::Ge => return compare(op, &left, &right, location),
        _ => {}
    }

    let result = match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => return int_op(op, *a, *b, location),
        (Value::Float(a), Value::Float(b)) => float_op(op, *a, *b),
        (Value::Bool(a), Value::Bool(b)) => bool_op(op, *a, *b),
        (Value::String(a), Value::String(b)) if op == Op::Add => {
            Some(Value::string(format!("{}{}", a, b)))
        }
        _ => None,
    };

    result.ok_or_else(|| invalid_operands(op, &left, &right, location))
}

fn int_op(op: Op, a: i64, b: i64, location: Option<SourceLocation>) -> Result<Value, EvalError> {
    let overflow = || EvalError::IntegerOverflow { location };

    if matches!(op, Op::Div | Op::Rem) && b == 0 {
        return Err(EvalError::DivisionByZero { location });
    }

    let n = match op {
        Op::Add => a.checked_add(b).ok_or_else(overflow)?,
        Op::Sub => a.checked_sub(b).ok_or_else(overflow)?,
        Op::Mul => a.checked_mul(b).ok_or_else(overflow)?,
        Op::Div => a.checked_div(b).ok_or_else(overflow)?,
        Op::Rem => a.checked_rem(b).ok_or_else(overflow)?,
        Op::BitAnd => a & b,
        Op::BitOr => a | b,
        Op::BitXor => a ^ b,
        Op::Shl => u32::try_from(b)
            .ok()
            .and_then(|s| a.checked_shl(s))
            .ok_or_else(overflow)?,
        Op::Shr => u32::try_from(b)
            .ok()
            .and_then(|s| a.checked_shr(s))
            .ok_or_else(overflow)?,
        Op::Eq | Op::Ne | Op::Lt | Op::Le | Op::Gt | Op::Ge => unreachable!(),
    };

    Ok(Value::Int(n))
}

fn float_op(op: Op, a: f64, b: f64) -> Option<Value> {
    let n = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        Op::Rem => a % b,
        _ => return None,
    };
    Some(Value::Float(n))
}

fn bool_op(op: Op, a: bool, b: bool) -> Option<Value> {
    let b = match op {
        Op::BitAnd => a & b,
        Op::BitOr => a | b,
        Op::BitXor => a ^ b,
        _ => return None,
    };
    Some(Value::Bool(b))
}

fn compare(
    op: Op,
    left: &Value,
    right: &Value,
    location: Option<SourceLocation>,
) -> Result<Value, EvalError> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => a.partial_cmp(b),
        (Value::Char(a), Value::Char(b)) => a.partial_cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
        _ => return Err(invalid_operands(op, left, right, location)),
    };

    // NaN compares false under every operator
    let Some(ordering) = ordering else {
        return Ok(Value::Bool(false));
    };

    let holds = match op {
        Op::Lt => ordering == Ordering::Less,
        Op::Le => ordering != Ordering::Greater,
        Op::Gt => ordering == Ordering::Greater,
        Op::Ge => ordering != Ordering::Less,
        _ => unreachable!(),
    };
    Ok(Value::Bool(holds))
}

fn invalid_operands(
    op: Op,
    left: &Value,
    right: &Value,
    location: Option<SourceLocation>,
) -> EvalError {
    EvalError::InvalidBinaryOperands {
        op: op.symbol().to_string(),
        left_type: left.type_name().to_string(),
        right_type: right.type_name().to_string(),
        location,
    }
}
