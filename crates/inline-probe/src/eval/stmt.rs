//! Statement, block and item evaluation

use std::sync::Arc;

use tracing::trace;

use crate::value::FunctionValue;
use crate::{Environment, EvalContext, EvalError, Value};

use super::local::eval_local;
use super::{location_of, Evaluate};

/// Evaluate a statement.
///
/// # Errors
///
/// Returns errors from statement evaluation.
pub fn eval_stmt(
    stmt: &syn::Stmt,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    match stmt {
        // Expression without semicolon: value is returned
        syn::Stmt::Expr(expr, None) => expr.eval(env, ctx),

        // Expression with semicolon: evaluate for side effects, return unit
        syn::Stmt::Expr(expr, Some(_)) => {
            expr.eval(env, ctx)?;
            Ok(Value::Unit)
        }

        syn::Stmt::Local(local) => {
            eval_local(local, env, ctx)?;
            Ok(Value::Unit)
        }

        syn::Stmt::Item(item) => {
            eval_item(item, env, ctx)?;
            Ok(Value::Unit)
        }

        syn::Stmt::Macro(stmt_macro) => Err(EvalError::UnsupportedExpr {
            kind: format!(
                "macro statement `{}!`",
                stmt_macro
                    .mac
                    .path
                    .segments
                    .last()
                    .map(|s| s.ident.to_string())
                    .unwrap_or_default()
            ),
            location: location_of(stmt_macro),
        }),
    }
}

/// Evaluate a block in a fresh frame.
///
/// # Errors
///
/// Returns `DepthExceeded` past `ctx.max_depth` nested blocks, and any
/// error from the statements.
pub fn eval_block(
    block: &syn::Block,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    if env.depth() > ctx.max_depth {
        return Err(EvalError::DepthExceeded { max: ctx.max_depth });
    }
    let mut scope = env.scope_guard();
    eval_block_stmts(&block.stmts, &mut scope, ctx)
}

/// Evaluate statements in the current frame, returning the last value.
///
/// # Errors
///
/// Returns the first statement error.
pub fn eval_block_stmts(
    stmts: &[syn::Stmt],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut last_value = Value::Unit;
    for stmt in stmts {
        last_value = eval_stmt(stmt, env, ctx)?;
    }
    Ok(last_value)
}

/// Evaluate an item declaration.
///
/// `fn` binds a (non-callable) function value; `const` and `static` bind
/// their initializer. Type-level declarations have no runtime value.
pub(crate) fn eval_item(
    item: &syn::Item,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<(), EvalError> {
    match item {
        syn::Item::Fn(item_fn) => {
            let func = FunctionValue::from_item(item_fn);
            env.define(func.name.clone(), Value::Function(Arc::new(func)));
            Ok(())
        }

        syn::Item::Const(item_const) => {
            let value = item_const.expr.eval(env, ctx)?;
            env.define(item_const.ident.to_string(), value);
            Ok(())
        }

        syn::Item::Static(item_static) => {
            let value = item_static.expr.eval(env, ctx)?;
            let mode = match item_static.mutability {
                syn::StaticMutability::Mut(_) => crate::BindingMode::Mutable,
                _ => crate::BindingMode::Immutable,
            };
            env.define_with_mode(item_static.ident.to_string(), value, mode);
            Ok(())
        }

        syn::Item::Struct(_)
        | syn::Item::Enum(_)
        | syn::Item::Use(_)
        | syn::Item::Impl(_)
        | syn::Item::Trait(_)
        | syn::Item::Type(_)
        | syn::Item::Mod(_) => {
            trace!("declaration item has no runtime binding");
            Ok(())
        }

        _ => Err(EvalError::UnsupportedExpr {
            kind: "item".to_string(),
            location: location_of(item),
        }),
    }
}
