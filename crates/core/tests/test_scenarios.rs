//! End-to-end scenarios an interpreter loop runs against the stack
//!
//! Run with `RUST_LOG=glyph_core=trace` to see op dispatch events.

use glyph_core::{Stack, StackConfig, StackError, StackOp};

fn init_tracing() {
    // Later calls fail harmlessly once a subscriber is installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_swap_then_pop() {
    init_tracing();
    let mut stack = Stack::new();
    stack.push_n(['x', 'y', 'z']);

    StackOp::Swap.apply(&mut stack).unwrap();

    assert_eq!(stack.pop(), Ok('y'));
    assert_eq!(stack.pop(), Ok('z'));
    assert_eq!(stack.pop(), Ok('x'));
}

#[test]
fn test_rshift_then_pop() {
    init_tracing();
    let mut stack = Stack::new();
    stack.push_n(['a', 'b', 'c']);

    StackOp::Rshift.apply(&mut stack).unwrap();

    assert_eq!(stack.pop(), Ok('b'));
    assert_eq!(stack.pop(), Ok('a'));
    assert_eq!(stack.pop(), Ok('c'));
    assert!(stack.is_empty());
}

#[test]
fn test_duplicate_then_pop_n() {
    init_tracing();
    let mut stack = Stack::new();
    stack.push('字');
    assert_eq!(stack.len(), 1);

    StackOp::Duplicate.apply(&mut stack).unwrap();
    assert_eq!(stack.len(), 2);

    assert_eq!(stack.pop_n(2), Ok(vec!['字', '字']));
}

#[test]
fn test_empty_stack_errors_are_recoverable() {
    init_tracing();
    let mut stack: Stack = Stack::new();

    assert_eq!(stack.pop(), Err(StackError::EmptyStack { op: "pop" }));
    assert_eq!(stack.len(), 0);

    // Still usable after the failure
    stack.push('o');
    stack.push('k');
    assert_eq!(stack.pop_n(2), Ok(vec!['k', 'o']));
}

#[test]
fn test_error_message_names_operation() {
    let mut stack = Stack::new();
    stack.push_n(['a', 'b']);

    let err = stack.rshift().unwrap_err();
    assert_eq!(err.to_string(), "rshift: requires 3 values, stack has 2");

    let err = stack.pop_n(5).unwrap_err();
    assert_eq!(err.to_string(), "pop_n: requires 5 values, stack has 2");
}

#[test]
fn test_error_propagates_with_question_mark() {
    // Shape of an interpreter step that bails on the first failure
    fn step(stack: &mut Stack) -> Result<char, Box<dyn std::error::Error>> {
        StackOp::Swap.apply(stack)?;
        Ok(stack.pop()?)
    }

    let mut deep: Stack = "pq".chars().collect();
    assert_eq!(step(&mut deep).unwrap(), 'p');

    let mut shallow: Stack = "p".chars().collect();
    let err = step(&mut shallow).unwrap_err();
    assert_eq!(err.to_string(), "swap: requires 2 values, stack has 1");
    assert_eq!(shallow.len(), 1);
}

#[test]
fn test_config_from_embedding_application() {
    #[derive(serde::Deserialize)]
    struct InterpreterConfig {
        stack: StackConfig,
    }

    let config: InterpreterConfig = toml::from_str(
        r#"
        [stack]
        initial_capacity = 32
        "#,
    )
    .unwrap();

    let mut stack: Stack = Stack::with_config(&config.stack);
    assert!(stack.capacity() >= 32);

    stack.push_n("glyph".chars());
    assert_eq!(stack.to_string(), "stack: g l y p h");
}

#[test]
fn test_deep_stack_round_trip() {
    let letters: Vec<char> = ('a'..='z').cycle().take(i16::MAX as usize).collect();
    let mut stack = Stack::new();

    stack.push_n(letters.iter().copied());
    assert_eq!(stack.len(), letters.len());

    let popped = stack.pop_n(letters.len()).unwrap();
    assert!(popped.iter().eq(letters.iter().rev()));
    assert!(stack.is_empty());
}
