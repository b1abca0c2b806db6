//! Unit tests for property access: get, pick, pick_all, omit.

use hanuman::error::Error;
use hanuman::prelude::*;
use rstest::rstest;

fn users() -> Value {
    seq![
        mapping! {
            "id" => "1ad3x",
            "name" => mapping! { "first" => "Albert", "last" => "King" },
            "age" => 44,
        },
        mapping! {
            "id" => "4jde2",
            "name" => mapping! { "first" => "Joe", "last" => "Brown" },
            "age" => 26,
        },
    ]
}

// =============================================================================
// get
// =============================================================================

#[test]
fn test_get_accepts_a_single_key() {
    assert_eq!(
        get(&Value::from("a"), &mapping! { "a" => 44 }).unwrap(),
        Value::Number(44.0),
    );
}

#[test]
fn test_get_returns_null_for_a_missing_key() {
    assert_eq!(
        get(&Value::from("a"), &mapping! { "b" => 55 }).unwrap(),
        Value::Null,
    );
}

#[test]
fn test_get_accepts_a_dotted_path() {
    let nested = mapping! { "a" => mapping! { "b" => mapping! { "c" => 44 } } };
    assert_eq!(
        get(&Value::from("a.b.c"), &nested).unwrap(),
        Value::Number(44.0),
    );
}

#[test]
fn test_get_accepts_a_key_sequence() {
    let nested = mapping! { "a" => mapping! { "b" => mapping! { "c" => 44 } } };
    assert_eq!(
        get(&seq!["a", "b", "c"], &nested).unwrap(),
        Value::Number(44.0),
    );
}

#[test]
fn test_get_returns_null_the_moment_a_level_is_missing() {
    let nested = mapping! { "a" => mapping! { "b" => mapping! { "x" => 1 } } };
    assert_eq!(get(&Value::from("a.b.c"), &nested).unwrap(), Value::Null);
    // A missing level below a leaf does not fail either.
    assert_eq!(get(&Value::from("a.b.x.deeper"), &nested).unwrap(), Value::Null);
}

#[test]
fn test_get_walks_through_sequences() {
    assert_eq!(
        get(&seq![0, "name", "first"], &users()).unwrap(),
        Value::from("Albert"),
    );
    assert_eq!(
        get(&seq![1, "age"], &users()).unwrap(),
        Value::Number(26.0),
    );
}

#[rstest]
#[case(Value::Null)]
#[case(Value::Number(5.0))]
#[case(Value::from("text"))]
fn test_get_rejects_non_collection_roots(#[case] root: Value) {
    assert_eq!(get(&Value::from("a"), &root), Err(Error::NotCollection));
}

// =============================================================================
// pick
// =============================================================================

#[test]
fn test_pick_copies_listed_properties() {
    let source = mapping! { "a" => 44, "b" => 55, "c" => 66 };
    assert_eq!(
        pick(&seq!["a", "b"], &source).unwrap(),
        mapping! { "a" => 44, "b" => 55 },
    );
}

#[test]
fn test_pick_skips_absent_properties() {
    let source = mapping! { "a" => 44, "c" => 66 };
    assert_eq!(
        pick(&seq!["a", "b"], &source).unwrap(),
        mapping! { "a" => 44 },
    );
}

#[test]
fn test_pick_is_an_ownership_check_not_a_null_check() {
    let source = mapping! { "a" => Value::Null };
    assert_eq!(
        pick(&seq!["a"], &source).unwrap(),
        mapping! { "a" => Value::Null },
    );
}

#[test]
fn test_pick_deep_clones_values() {
    let source = mapping! { "nested" => mapping! { "x" => 1 } };
    let picked = pick(&seq!["nested"], &source).unwrap();
    // Equal in structure, distinct in storage: mutating the copy through a
    // rebuilt mapping leaves the source untouched.
    assert_eq!(picked, mapping! { "nested" => mapping! { "x" => 1 } });
    assert_eq!(source, mapping! { "nested" => mapping! { "x" => 1 } });
}

#[test]
fn test_pick_rejects_non_mapping_source() {
    assert_eq!(pick(&seq!["a"], &seq![1]), Err(Error::NotMapping));
}

#[test]
fn test_pick_rejects_non_sequence_props() {
    let source = mapping! { "a" => 1 };
    assert_eq!(
        pick(&Value::from("a"), &source),
        Err(Error::NotSequence),
    );
}

// =============================================================================
// pick_all
// =============================================================================

#[test]
fn test_pick_all_copies_listed_properties() {
    let source = mapping! { "a" => 44, "b" => 55, "c" => 66 };
    assert_eq!(
        pick_all(&seq!["a", "b"], &source).unwrap(),
        mapping! { "a" => 44, "b" => 55 },
    );
}

#[test]
fn test_pick_all_binds_missing_properties_to_null() {
    let source = mapping! { "a" => 44, "c" => 66 };
    assert_eq!(
        pick_all(&seq!["a", "b", "c"], &source).unwrap(),
        mapping! { "a" => 44, "b" => Value::Null, "c" => 66 },
    );
}

// =============================================================================
// omit
// =============================================================================

#[test]
fn test_omit_drops_listed_properties() {
    let source = mapping! { "a" => 44, "b" => 55, "c" => 66 };
    assert_eq!(
        omit(&seq!["b"], &source).unwrap(),
        mapping! { "a" => 44, "c" => 66 },
    );
}

#[test]
fn test_omit_ignores_keys_absent_from_the_source() {
    let source = mapping! { "a" => 44 };
    assert_eq!(omit(&seq!["x", "y"], &source).unwrap(), source);
}

#[test]
fn test_pick_and_omit_partition_the_key_set() {
    let source = mapping! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 };
    let keys = seq!["b", "d"];

    let picked = pick(&keys, &source).unwrap();
    let omitted = omit(&keys, &source).unwrap();

    let picked_count = picked.as_mapping().unwrap().len();
    let omitted_count = omitted.as_mapping().unwrap().len();
    assert_eq!(picked_count + omitted_count, source.as_mapping().unwrap().len());
    for key in picked.as_mapping().unwrap().keys() {
        assert!(!omitted.as_mapping().unwrap().contains_key(key));
    }
}
