//! Runtime environment: the symbol table a script runs against

mod frame;

pub use frame::ScopeGuard;

use crate::error::EnvironmentError;
use crate::symbol::{Symbol, DEFAULT_RESERVED_NAME};
use crate::value::Value;

/// A single variable binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: Value,

    /// Whether this binding is mutable
    pub mutable: bool,
}

/// Binding mode for let statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    /// Immutable binding: `let x = ...`
    Immutable,

    /// Mutable binding: `let mut x = ...`
    Mutable,
}

/// The runtime environment managing variable bindings.
///
/// Uses a flat scope design with frame boundaries: entering a block
/// records the current length, leaving it truncates back. The reserved
/// probe name never lands in the binding list; it has its own slot.
///
/// # Example
///
/// ```
/// use inline_probe::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Int(1));
///
/// env.push_frame();
/// env.define("x", Value::Int(10)); // Shadows outer x
/// assert_eq!(env.get("x"), Some(&Value::Int(10)));
///
/// env.pop_frame();
/// assert_eq!(env.get("x"), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// All bindings in a flat array (most recent at end)
    bindings: Vec<Binding>,

    /// Frame boundaries (indices into bindings)
    frames: Vec<usize>,

    /// Spelling of the reserved probe name
    reserved: String,

    /// Value held by the probe slot, if any
    probe: Option<Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new empty environment using the default reserved name.
    pub fn new() -> Self {
        Self::with_reserved_name(DEFAULT_RESERVED_NAME)
    }

    /// Create an environment with a custom reserved probe name.
    pub fn with_reserved_name(reserved: impl Into<String>) -> Self {
        Self {
            bindings: Vec::new(),
            frames: vec![0], // Global scope
            reserved: reserved.into(),
            probe: None,
        }
    }

    /// The reserved probe name this environment was built with.
    pub fn reserved_name(&self) -> &str {
        &self.reserved
    }

    /// Classify a name against the reserved probe name.
    pub fn symbol(&self, name: &str) -> Symbol {
        Symbol::classify(name, &self.reserved)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Frame Management (Scope Entry/Exit)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a new scope (push a frame).
    pub fn push_frame(&mut self) {
        self.frames.push(self.bindings.len());
    }

    /// Exit the current scope (pop a frame).
    ///
    /// Removes all bindings defined since the matching `push_frame()`.
    /// The global frame is never popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            if let Some(boundary) = self.frames.pop() {
                self.bindings.truncate(boundary);
            }
        }
    }

    /// Get the current scope depth (number of frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if we're at global scope.
    pub fn is_global_scope(&self) -> bool {
        self.frames.len() == 1
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Define a new immutable binding in the current scope.
    ///
    /// Always creates a new binding, shadowing any earlier one.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.define_with_mode(name, value, BindingMode::Immutable);
    }

    /// Define a new binding with explicit mutability.
    ///
    /// Defining the reserved name fills the probe slot instead.
    pub fn define_with_mode(&mut self, name: impl Into<String>, value: Value, mode: BindingMode) {
        let name = name.into();
        match self.symbol(&name) {
            Symbol::Probe => self.probe = Some(value),
            Symbol::Named(name) => self.bindings.push(Binding {
                name,
                value,
                mutable: mode == BindingMode::Mutable,
            }),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a value by name.
    ///
    /// Returns the most recent binding with the given name, or `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.lookup(&self.symbol(name))
    }

    /// Look up a value by symbol.
    pub fn lookup(&self, symbol: &Symbol) -> Option<&Value> {
        match symbol {
            Symbol::Probe => self.probe.as_ref(),
            Symbol::Named(name) => self
                .bindings
                .iter()
                .rev()
                .find(|b| &b.name == name)
                .map(|b| &b.value),
        }
    }

    /// Look up a binding and return the full Binding struct.
    pub fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().rev().find(|b| b.name == name)
    }

    /// Check if a name is bound (the probe slot counts when filled).
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Current contents of the probe slot.
    pub fn probe(&self) -> Option<&Value> {
        self.probe.as_ref()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Assignment (Mutation)
    // ═══════════════════════════════════════════════════════════════════

    /// Assign a new value to an existing mutable binding.
    ///
    /// The probe slot accepts assignment unconditionally.
    ///
    /// # Errors
    ///
    /// - `UndefinedVariable` if the binding doesn't exist
    /// - `ImmutableBinding` if the binding is not mutable
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), EnvironmentError> {
        if self.symbol(name).is_probe() {
            self.probe = Some(value);
            return Ok(());
        }

        let binding = self
            .bindings
            .iter_mut()
            .rev()
            .find(|b| b.name == name)
            .ok_or_else(|| EnvironmentError::UndefinedVariable {
                name: name.to_string(),
            })?;

        if !binding.mutable {
            return Err(EnvironmentError::ImmutableBinding {
                name: name.to_string(),
            });
        }
        binding.value = value;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Get all binding names, oldest first.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }

    /// Get the number of bindings (the probe slot is not counted).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Reset to a single empty global frame.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.frames = vec![0];
        self.probe = None;
    }
}
