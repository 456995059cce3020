//! Property-based tests for the whole pipeline.
//!
//! These tests verify that:
//! 1. No input, well-formed or not, ever raises an internal error
//! 2. Well-formed expressions always evaluate
//! 3. Evaluating a tree twice gives the same result
//! 4. The printed tree evaluates to the same value as the source

use numerate::{calculate, evaluate, lex, parse};
use proptest::prelude::*;

const BINARY_OPERATORS: &[&str] =
    &["+", "-", "*", "×", "/", "÷", "%", "**", "<<", ">>", ">>>", "&", "^", "|"];
const UNARY_OPERATORS: &[&str] = &["+", "-", "~", "√"];
const FUNCTIONS: &[&str] = &["max", "min", "sum", "hypot"];

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        (1u32..1000).prop_map(|n| format!(".{n}")),
        (0u32..0x1_0000).prop_map(|n| format!("0x{n:X}")),
        (0u32..64).prop_map(|n| format!("0b{n:b}")),
        (0u32..512).prop_map(|n| format!("0o{n:o}")),
        Just("pi".to_string()),
        Just("E".to_string()),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    literal_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPERATORS), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (prop::sample::select(UNARY_OPERATORS), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            (prop::sample::select(FUNCTIONS), prop::collection::vec(inner, 0..4))
                .prop_map(|(name, args)| format!("{name}({})", args.join(", "))),
        ]
    })
}

fn same_number(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

proptest! {
    #[test]
    fn arbitrary_text_never_breaks_an_invariant(source in "\\PC{0,40}") {
        if let Err(e) = calculate(&source) {
            prop_assert!(!e.is_internal(), "{source:?} raised {e}");
        }
    }

    #[test]
    fn near_miss_text_never_breaks_an_invariant(
        source in "[0-9a-fxob .,()+*/%<>&|^~√×÷-]{0,40}"
    ) {
        if let Err(e) = calculate(&source) {
            prop_assert!(!e.is_internal(), "{source:?} raised {e}");
        }
    }

    #[test]
    fn well_formed_expressions_evaluate(source in expression_strategy()) {
        let result = calculate(&source);
        prop_assert!(result.is_ok(), "{source:?} failed: {result:?}");
    }

    #[test]
    fn evaluation_is_idempotent(source in expression_strategy()) {
        let tokens = lex(&source).unwrap();
        let expr = parse(&tokens).unwrap();

        let first = evaluate(&expr).unwrap();
        let second = evaluate(&expr).unwrap();
        prop_assert!(same_number(first, second), "{source:?}: {first} then {second}");
    }

    #[test]
    fn printed_tree_keeps_its_value(source in expression_strategy()) {
        let expr = parse(&lex(&source).unwrap()).unwrap();
        let printed = expr.to_string();

        let original = evaluate(&expr).unwrap();
        let reparsed = calculate(&printed).unwrap();
        prop_assert!(same_number(original, reparsed),
                     "{source:?} -> {printed:?}: {original} vs {reparsed}");
    }
}
