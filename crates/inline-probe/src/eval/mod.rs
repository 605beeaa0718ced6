//! Expression evaluation

pub mod assign;
pub mod binary;
pub mod compound;
pub mod if_expr;
pub mod literal;
pub mod local;
pub mod path;
pub mod stmt;
pub mod unary;

use syn::spanned::Spanned;

use crate::error::SourceLocation;
use crate::{Environment, EvalContext, EvalError, Value};

/// Trait for evaluating AST nodes to values.
///
/// Each supported `syn` expression type implements this trait.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for syn::Expr {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        match self {
            syn::Expr::Lit(expr) => expr.eval(env, ctx),
            syn::Expr::Path(expr) => expr.eval(env, ctx),
            syn::Expr::Unary(expr) => expr.eval(env, ctx),
            syn::Expr::Binary(expr) => expr.eval(env, ctx),
            syn::Expr::Assign(expr) => expr.eval(env, ctx),

            syn::Expr::Array(expr) => expr.eval(env, ctx),
            syn::Expr::Repeat(expr) => expr.eval(env, ctx),
            syn::Expr::Tuple(expr) => expr.eval(env, ctx),
            syn::Expr::Index(expr) => expr.eval(env, ctx),
            syn::Expr::Field(expr) => expr.eval(env, ctx),

            syn::Expr::If(expr) => expr.eval(env, ctx),
            syn::Expr::Block(expr) => expr.eval(env, ctx),

            syn::Expr::Paren(expr) => expr.expr.eval(env, ctx),
            syn::Expr::Group(expr) => expr.expr.eval(env, ctx),

            _ => Err(EvalError::UnsupportedExpr {
                kind: expr_kind_name(self).to_string(),
                location: location_of(self),
            }),
        }
    }
}

/// Get a human-readable name for an expression kind.
fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Async(_) => "async block",
        syn::Expr::Await(_) => "await",
        syn::Expr::Break(_) => "break",
        syn::Expr::Call(_) => "function call",
        syn::Expr::Cast(_) => "cast",
        syn::Expr::Closure(_) => "closure",
        syn::Expr::Const(_) => "const block",
        syn::Expr::Continue(_) => "continue",
        syn::Expr::ForLoop(_) => "for loop",
        syn::Expr::Infer(_) => "infer",
        syn::Expr::Let(_) => "let guard",
        syn::Expr::Loop(_) => "loop",
        syn::Expr::Macro(_) => "macro invocation",
        syn::Expr::Match(_) => "match",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Range(_) => "range",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Return(_) => "return",
        syn::Expr::Struct(_) => "struct literal",
        syn::Expr::Try(_) => "try",
        syn::Expr::TryBlock(_) => "try block",
        syn::Expr::Unsafe(_) => "unsafe block",
        syn::Expr::While(_) => "while",
        syn::Expr::Yield(_) => "yield",
        _ => "unknown",
    }
}

/// Start location of any syntax node.
pub(crate) fn location_of<T: Spanned>(node: &T) -> Option<SourceLocation> {
    Some(SourceLocation::from_span(node.span()))
}

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(
    expr: &syn::Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    expr.eval(env, ctx)
}

pub use path::{simple_ident, simple_path_ident};
pub use stmt::{eval_block, eval_block_stmts, eval_stmt};
