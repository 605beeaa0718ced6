//! Statement walker that collects probes

use syn::visit::{self, Visit};
use tracing::debug;

use crate::error::SourceLocation;
use crate::eval::simple_ident;
use crate::Environment;

use super::Probe;

/// Walks statements and resolves each candidate name in `env`.
///
/// Nested statements (inside blocks, branches and function bodies) are
/// visited too; their names are still resolved against `env`, so locals
/// the top-level scope cannot see resolve to nothing and are skipped.
pub struct Inspector<'env> {
    env: &'env Environment,
    probes: Vec<Probe>,
    candidates: usize,
}

impl<'env> Inspector<'env> {
    /// Create an inspector reading from `env`.
    pub fn new(env: &'env Environment) -> Self {
        Self {
            env,
            probes: Vec::new(),
            candidates: 0,
        }
    }

    /// Walk `stmts` in source order and return the collected probes.
    pub fn inspect(mut self, stmts: &[syn::Stmt]) -> Vec<Probe> {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
        debug!(
            candidates = self.candidates,
            reported = self.probes.len(),
            "inspection finished"
        );
        self.probes
    }

    fn probe_expr(&mut self, expr: &syn::Expr) {
        if let Some(ident) = simple_ident(expr) {
            self.probe_ident(ident);
        }
    }

    /// The target of a `let`. Only a plain identifier counts; a tuple
    /// pattern is a single target that is not a name.
    fn probe_pat(&mut self, pat: &syn::Pat) {
        match pat {
            syn::Pat::Ident(pat_ident)
                if pat_ident.by_ref.is_none() && pat_ident.subpat.is_none() =>
            {
                self.probe_ident(&pat_ident.ident)
            }
            syn::Pat::Type(pat_type) => self.probe_pat(&pat_type.pat),
            syn::Pat::Paren(pat_paren) => self.probe_pat(&pat_paren.pat),
            _ => {}
        }
    }

    fn probe_ident(&mut self, ident: &syn::Ident) {
        self.candidates += 1;

        let name = ident.to_string();
        let symbol = self.env.symbol(&name);
        if symbol.is_probe() {
            return;
        }
        let Some(value) = self.env.lookup(&symbol) else {
            return;
        };

        let location = SourceLocation::from_span(ident.span());
        self.probes.push(Probe {
            name,
            line: location.line,
            column: location.column,
            value: value.to_string(),
        });
    }
}

impl<'ast> Visit<'ast> for Inspector<'_> {
    fn visit_stmt(&mut self, stmt: &'ast syn::Stmt) {
        match stmt {
            syn::Stmt::Local(local) => self.probe_pat(&local.pat),
            syn::Stmt::Expr(syn::Expr::Assign(assign), _) => self.probe_expr(&assign.left),
            syn::Stmt::Expr(expr, _) => self.probe_expr(expr),
            syn::Stmt::Item(_) | syn::Stmt::Macro(_) => {}
        }
        visit::visit_stmt(self, stmt);
    }
}
