//! Environment tests

use inline_probe::*;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert_eq!(env.depth(), 1); // Global frame
    assert_eq!(env.reserved_name(), DEFAULT_RESERVED_NAME);
}

#[test]
fn test_environment_define_and_get() {
    let mut env = Environment::new();
    env.define("x", Value::Int(42));

    assert_eq!(env.get("x"), Some(&Value::Int(42)));
    assert_eq!(env.get("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}

#[test]
fn test_environment_names_in_definition_order() {
    let mut env = Environment::new();
    env.define("a", Value::Int(1));
    env.define("b", Value::Int(2));
    env.define("c", Value::Int(3));

    assert_eq!(env.names(), vec!["a", "b", "c"]);
    assert_eq!(env.iter().count(), 3);
}

// ═══════════════════════════════════════════════════════════════════════
// Scoping and Shadowing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_push_pop_frame() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));

    env.push_frame();
    env.define("y", Value::Int(2));
    assert_eq!(env.depth(), 2);
    assert!(!env.is_global_scope());
    assert_eq!(env.get("x"), Some(&Value::Int(1)));

    env.pop_frame();
    assert!(env.is_global_scope());
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_environment_pop_global_frame_is_noop() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.pop_frame();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("x"), Some(&Value::Int(1)));
}

#[test]
fn test_environment_shadowing_same_scope() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.define("x", Value::string("shadow"));

    assert_eq!(env.get("x"), Some(&Value::string("shadow")));
    assert_eq!(env.len(), 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Assignment
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_assign_mutable() {
    let mut env = Environment::new();
    env.define_with_mode("x", Value::Int(1), BindingMode::Mutable);

    env.assign("x", Value::Int(2)).unwrap();
    assert_eq!(env.get("x"), Some(&Value::Int(2)));
}

#[test]
fn test_environment_assign_undefined() {
    let mut env = Environment::new();
    assert_eq!(
        env.assign("x", Value::Int(2)),
        Err(EnvironmentError::UndefinedVariable {
            name: "x".to_string()
        })
    );
}

#[test]
fn test_environment_assign_hits_innermost_shadow() {
    let mut env = Environment::new();
    env.define_with_mode("x", Value::Int(1), BindingMode::Mutable);
    env.push_frame();
    env.define("x", Value::Int(10));

    // Inner x is immutable even though outer x is mutable
    assert!(env.assign("x", Value::Int(2)).is_err());
    env.pop_frame();
    assert!(env.assign("x", Value::Int(2)).is_ok());
}

// ═══════════════════════════════════════════════════════════════════════
// Reserved Probe Slot
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_symbol_classification() {
    let env = Environment::with_reserved_name("__slot");
    assert_eq!(env.symbol("__slot"), Symbol::Probe);
    assert_eq!(env.symbol("x"), Symbol::Named("x".to_string()));
}

#[test]
fn test_probe_slot_is_not_a_binding() {
    let mut env = Environment::new();
    env.define(DEFAULT_RESERVED_NAME, Value::Int(1));

    assert!(env.is_empty());
    assert!(env.get_binding(DEFAULT_RESERVED_NAME).is_none());
    assert!(env.contains(DEFAULT_RESERVED_NAME));
    assert_eq!(env.probe(), Some(&Value::Int(1)));
}
