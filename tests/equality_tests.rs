//! Unit tests for deep equality, deep cloning, and emptiness.

use hanuman::curry::curry;
use hanuman::prelude::*;
use rstest::rstest;

// =============================================================================
// equals
// =============================================================================

#[rstest]
#[case(Value::Null, Value::Null, true)]
#[case(Value::Bool(true), Value::Bool(true), true)]
#[case(Value::Bool(true), Value::Bool(false), false)]
#[case(Value::Number(1.5), Value::Number(1.5), true)]
#[case(Value::Number(0.0), Value::Number(-0.0), true)]
#[case(Value::from("a"), Value::from("a"), true)]
#[case(Value::from("a"), Value::from("b"), false)]
#[case(Value::Null, Value::Bool(false), false)]
#[case(Value::Number(0.0), Value::Bool(false), false)]
fn test_primitive_equality(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
    assert_eq!(equals(&left, &right), expected);
    assert_eq!(equals(&right, &left), expected);
}

#[test]
fn test_sequences_are_order_sensitive() {
    assert!(equals(&seq![1, 2, 3], &seq![1, 2, 3]));
    assert!(!equals(&seq![1, 2, 3], &seq![3, 2, 1]));
    assert!(!equals(&seq![1, 2, 3], &seq![1, 2]));
}

#[test]
fn test_mappings_compare_by_key_set() {
    let left = mapping! { "a" => 1, "b" => seq![1, 2] };
    let same = mapping! { "b" => seq![1, 2], "a" => 1 };
    assert!(equals(&left, &same));

    let superset = mapping! { "a" => 1, "b" => seq![1, 2], "c" => 3 };
    assert!(!equals(&left, &superset));
    assert!(!equals(&superset, &left));
}

#[test]
fn test_sequence_never_equals_mapping() {
    assert!(!equals(&seq![], &mapping! {}));
}

#[test]
fn test_nested_structures_compare_deeply() {
    let left = mapping! {
        "users" => seq![mapping! { "name" => "Albert", "tags" => seq!["a", "b"] }],
    };
    let right = mapping! {
        "users" => seq![mapping! { "name" => "Albert", "tags" => seq!["a", "b"] }],
    };
    assert!(equals(&left, &right));
}

#[test]
fn test_callable_equality_is_reference_identity() {
    let callable = curry(1, |_, args| Ok(args[0].clone()));
    let clone = callable.clone();
    let lookalike = curry(1, |_, args| Ok(args[0].clone()));

    assert!(equals(&Value::from(callable.clone()), &Value::from(clone)));
    assert!(!equals(&Value::from(callable), &Value::from(lookalike)));
}

// =============================================================================
// deep_clone
// =============================================================================

#[test]
fn test_clone_of_a_collection_is_equal_but_distinct() {
    let source = mapping! {
        "numbers" => seq![1, 2, 3],
        "nested" => mapping! { "deep" => seq![mapping! { "x" => 1 }] },
    };
    let copy = deep_clone(&source);
    assert!(equals(&source, &copy));

    // Mutating the copy leaves the source untouched.
    let Value::Map(mut entries) = copy else {
        panic!("expected a mapping");
    };
    entries.insert("numbers".to_string(), seq![9]);
    assert_eq!(
        get(&Value::from("numbers"), &source).unwrap(),
        seq![1, 2, 3],
    );
}

#[test]
fn test_clone_of_primitives_is_by_value() {
    assert_eq!(deep_clone(&Value::Null), Value::Null);
    assert_eq!(deep_clone(&Value::Bool(true)), Value::Bool(true));
    assert_eq!(deep_clone(&Value::Number(2.5)), Value::Number(2.5));
    assert_eq!(deep_clone(&Value::from("text")), Value::from("text"));
}

#[test]
fn test_clone_preserves_callable_references() {
    let callable = curry(1, |_, args| Ok(args[0].clone()));
    let source = seq![Value::from(callable.clone())];
    let copy = deep_clone(&source);

    let copied_callable = copy.as_sequence().unwrap()[0].as_callable().unwrap();
    assert!(copied_callable.same_callable(&callable));
}

// =============================================================================
// is_empty
// =============================================================================

#[rstest]
#[case(Value::from(""), true)]
#[case(seq![], true)]
#[case(mapping! {}, true)]
#[case(Value::from("x"), false)]
#[case(seq![1], false)]
#[case(mapping! { "a" => 1 }, false)]
#[case(Value::Null, false)]
#[case(Value::Bool(false), false)]
#[case(Value::Number(0.0), false)]
fn test_is_empty(#[case] input: Value, #[case] expected: bool) {
    assert_eq!(input.is_empty(), expected);
}

#[test]
fn test_is_empty_is_false_for_callables() {
    let callable = curry(1, |_, args| Ok(args[0].clone()));
    assert!(!Value::from(callable).is_empty());
}
