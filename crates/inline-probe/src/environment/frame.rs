//! RAII scope guard for automatic frame cleanup

use super::Environment;

/// Guard that pushes a frame on creation and pops it when dropped.
///
/// Block evaluation uses this so that an early `?` return still
/// restores the enclosing scope.
///
/// # Example
///
/// ```
/// use inline_probe::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Int(1));
///
/// {
///     let mut guard = env.scope_guard();
///     guard.define("y", Value::Int(2));
/// }
/// assert!(!env.contains("y"));
/// assert!(env.contains("x"));
/// ```
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Create a scope guard that pushes a frame now and pops it on drop.
    pub fn scope_guard(&mut self) -> ScopeGuard<'_> {
        self.push_frame();
        ScopeGuard { env: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BindingMode, Value};

    #[test]
    fn test_scope_guard_drops_frame() {
        let mut env = Environment::new();
        let initial_depth = env.depth();

        {
            let guard = env.scope_guard();
            assert_eq!(guard.depth(), initial_depth + 1);
        }
        assert_eq!(env.depth(), initial_depth);
    }

    #[test]
    fn test_scope_guard_keeps_outer_mutation() {
        let mut env = Environment::new();
        env.define_with_mode("total", Value::Int(1), BindingMode::Mutable);

        {
            let mut guard = env.scope_guard();
            guard.define("step", Value::Int(2));
            guard.assign("total", Value::Int(3)).unwrap();
        }

        assert_eq!(env.get("total"), Some(&Value::Int(3)));
        assert_eq!(env.get("step"), None);
    }
}
