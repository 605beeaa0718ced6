//! Value representation for runtime values

mod display;
mod impls;

use std::sync::Arc;

/// Runtime value produced by evaluating a script.
///
/// Primitives are stored inline; compound values are `Arc`-wrapped so
/// cloning a binding out of the environment stays cheap.
#[derive(Clone, PartialEq)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The unit type `()`
    Unit,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    /// Integer (every integer literal is widened to `i64`)
    Int(i64),

    /// Floating point (every float literal is widened to `f64`)
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Heap-Allocated Compound Types
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Array `[a, b, c]`
    Array(Arc<Vec<Value>>),

    /// Tuple `(a, b)`
    Tuple(Arc<Vec<Value>>),

    /// Function declared with `fn` (bound, not callable)
    Function(Arc<FunctionValue>),
}

/// A function declared by the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionValue {
    /// Function name
    pub name: String,

    /// Parameter names, in declaration order
    pub params: Vec<String>,
}

impl FunctionValue {
    /// Build a function value from its declaration.
    pub fn from_item(item: &syn::ItemFn) -> Self {
        let params = item
            .sig
            .inputs
            .iter()
            .map(|arg| match arg {
                syn::FnArg::Receiver(_) => "self".to_string(),
                syn::FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
                    syn::Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                    _ => "_".to_string(),
                },
            })
            .collect();

        Self {
            name: item.sig.ident.to_string(),
            params,
        }
    }
}
