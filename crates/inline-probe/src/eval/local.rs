//! Local binding (let statement) evaluation

use quote::ToTokens;

use crate::{BindingMode, Environment, EvalContext, EvalError, Value};

use super::{location_of, Evaluate};

/// Bindings produced by a pattern: (name, value, mutable).
pub type PatternBindings = Vec<(String, Value, bool)>;

/// Evaluate a local (let) binding.
///
/// All names in the pattern are bound only after the whole pattern has
/// matched, so a mismatch leaves the environment untouched.
///
/// # Errors
///
/// Returns `RefutablePattern` if the pattern doesn't match its value, and
/// `UnsupportedExpr` for `let ... else`.
pub fn eval_local(
    local: &syn::Local,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<(), EvalError> {
    let value = match &local.init {
        Some(init) if init.diverge.is_some() => {
            return Err(EvalError::UnsupportedExpr {
                kind: "let-else".to_string(),
                location: location_of(local),
            })
        }
        Some(init) => init.expr.eval(env, ctx)?,
        None => Value::Unit,
    };

    let bindings = match_pattern(&local.pat, &value)?.ok_or_else(|| {
        EvalError::RefutablePattern {
            pattern: local.pat.to_token_stream().to_string(),
            location: location_of(&local.pat),
        }
    })?;

    for (name, val, mutable) in bindings {
        let mode = if mutable {
            BindingMode::Mutable
        } else {
            BindingMode::Immutable
        };
        env.define_with_mode(name, val, mode);
    }
    Ok(())
}

/// Match a value against an irrefutable-style pattern.
///
/// Returns `Ok(Some(bindings))` on a match, `Ok(None)` on a mismatch and
/// `Err` for pattern kinds a `let` here does not support.
pub(crate) fn match_pattern(
    pattern: &syn::Pat,
    value: &Value,
) -> Result<Option<PatternBindings>, EvalError> {
    match pattern {
        syn::Pat::Wild(_) => Ok(Some(vec![])),

        syn::Pat::Ident(pat_ident) => {
            if let Some((_, subpat)) = &pat_ident.subpat {
                return Err(EvalError::UnsupportedExpr {
                    kind: "`@` binding pattern".to_string(),
                    location: location_of(subpat),
                });
            }
            Ok(Some(vec![(
                pat_ident.ident.to_string(),
                value.clone(),
                pat_ident.mutability.is_some(),
            )]))
        }

        // Type ascription does not affect the runtime value
        syn::Pat::Type(pat_type) => match_pattern(&pat_type.pat, value),

        syn::Pat::Paren(pat_paren) => match_pattern(&pat_paren.pat, value),

        syn::Pat::Tuple(pat_tuple) => {
            let elements: &[Value] = match value {
                Value::Tuple(items) => items.as_slice(),
                Value::Unit => &[],
                _ => return Ok(None),
            };
            if pat_tuple.elems.len() != elements.len() {
                return Ok(None);
            }

            let mut all_bindings = vec![];
            for (pat, val) in pat_tuple.elems.iter().zip(elements) {
                match match_pattern(pat, val)? {
                    Some(bindings) => all_bindings.extend(bindings),
                    None => return Ok(None),
                }
            }
            Ok(Some(all_bindings))
        }

        other => Err(EvalError::UnsupportedExpr {
            kind: format!("pattern `{}` in let binding", other.to_token_stream()),
            location: location_of(other),
        }),
    }
}
