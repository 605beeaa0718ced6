//! Script evaluation tests

use inline_probe::*;

// Helper to run a script and return its final environment
fn run(src: &str) -> std::result::Result<Environment, ProbeError> {
    let mut env = Environment::new();
    Script::parse(src)?.run(&mut env, &EvalContext::default())?;
    Ok(env)
}

// Helper to evaluate a single expression
fn eval(src: &str) -> std::result::Result<Value, EvalError> {
    let expr: syn::Expr = syn::parse_str(src).expect("parse failed");
    eval_expr(&expr, &mut Environment::new(), &EvalContext::default())
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_literals() {
    assert_eq!(eval("42").unwrap(), Value::Int(42));
    assert_eq!(eval("2.5").unwrap(), Value::Float(2.5));
    assert_eq!(eval("true").unwrap(), Value::Bool(true));
    assert_eq!(eval("'z'").unwrap(), Value::Char('z'));
    assert_eq!(eval(r#""a\nb""#).unwrap(), Value::string("a\nb"));
}

#[test]
fn test_eval_precedence() {
    assert_eq!(eval("2 + 3 * 4 - 1").unwrap(), Value::Int(13));
    assert_eq!(eval("(2 + 3) * 4").unwrap(), Value::Int(20));
    assert_eq!(eval("-(1 + 2)").unwrap(), Value::Int(-3));
}

#[test]
fn test_eval_block_expression() {
    assert_eq!(eval("{ let x = 2; x * x }").unwrap(), Value::Int(4));
}

// ═══════════════════════════════════════════════════════════════════════
// Scripts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_script_bindings() {
    let env = run("let a = 3;\nlet b = a + 1;\nlet c = a * b;").unwrap();
    assert_eq!(env.get("a"), Some(&Value::Int(3)));
    assert_eq!(env.get("b"), Some(&Value::Int(4)));
    assert_eq!(env.get("c"), Some(&Value::Int(12)));
}

#[test]
fn test_script_mutation_through_blocks() {
    let src = "let mut total = 0;\nif true { total += 5; }\n{ total = total * 2; }";
    let env = run(src).unwrap();
    assert_eq!(env.get("total"), Some(&Value::Int(10)));
}

#[test]
fn test_script_block_locals_do_not_leak() {
    let env = run("let a = 1;\n{ let hidden = 2; }").unwrap();
    assert_eq!(env.names(), vec!["a"]);
}

#[test]
fn test_script_items() {
    let env = run("const N: i64 = 4;\nfn noop() {}\nstruct Marker;\nuse std::fmt;").unwrap();
    assert_eq!(env.get("N"), Some(&Value::Int(4)));
    assert!(matches!(env.get("noop"), Some(Value::Function(_))));
    assert!(env.get("Marker").is_none());
}

#[test]
fn test_script_function_call_rejected() {
    match run("fn f() {}\nf();").unwrap_err() {
        ProbeError::Eval {
            source: EvalError::UnsupportedExpr { kind, .. },
        } => assert_eq!(kind, "function call"),
        other => panic!("Expected UnsupportedExpr, got {:?}", other),
    }
}

#[test]
fn test_script_reassign_immutable_rejected() {
    assert!(matches!(
        run("let a = 1;\na = 2;"),
        Err(ProbeError::Eval {
            source: EvalError::Environment(EnvironmentError::ImmutableBinding { .. })
        })
    ));
}

#[test]
fn test_script_depth_limit() {
    let script = Script::parse("let x = { { { 1 } } };").unwrap();
    let mut env = Environment::new();

    let result = script.run(&mut env, &EvalContext::with_max_depth(2));
    assert!(matches!(
        result,
        Err(ProbeError::Eval {
            source: EvalError::DepthExceeded { max: 2 }
        })
    ));
}
