//! Path evaluation (variable lookup) and simple-name recognition

use crate::{Environment, EvalContext, EvalError, Value};

use super::{location_of, Evaluate};

impl Evaluate for syn::ExprPath {
    fn eval(&self, env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        let ident = simple_path_ident(self).ok_or_else(|| EvalError::UnsupportedExpr {
            kind: format!("qualified path `{}`", path_to_string(&self.path)),
            location: location_of(self),
        })?;

        let name = ident.to_string();
        env.get(&name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name,
                location: location_of(ident),
            })
    }
}

/// The identifier of a path that is a bare name: one segment, no
/// generic arguments, no leading `::`, no qualified self type.
pub fn simple_path_ident(path: &syn::ExprPath) -> Option<&syn::Ident> {
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        return None;
    }
    if path.path.segments.len() != 1 {
        return None;
    }
    let segment = path.path.segments.first()?;
    match segment.arguments {
        syn::PathArguments::None => Some(&segment.ident),
        _ => None,
    }
}

/// The identifier of an expression that is a bare name.
///
/// Parentheses and invisible groups around the name are looked through.
pub fn simple_ident(expr: &syn::Expr) -> Option<&syn::Ident> {
    match expr {
        syn::Expr::Path(path) if path.attrs.is_empty() => simple_path_ident(path),
        syn::Expr::Paren(paren) => simple_ident(&paren.expr),
        syn::Expr::Group(group) => simple_ident(&group.expr),
        _ => None,
    }
}

/// Convert a syn::Path to a string for error messages.
pub(crate) fn path_to_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
