//! Equality properties of value objects.

use catalog_types::{EntityId, ValueObject};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Label {
    value: String,
}

impl ValueObject for Label {}

#[derive(Debug, Clone, PartialEq)]
struct Price {
    value: String,
    amount: i64,
}

impl ValueObject for Price {}

#[derive(Debug, Clone, PartialEq)]
struct Tagged {
    owner: EntityId,
    labels: Vec<Label>,
}

impl ValueObject for Tagged {}

// ── Examples ──────────────────────────────────────────────────────

#[test]
fn equal_when_all_attributes_match() {
    let a = Label { value: "test".into() };
    let b = Label { value: "test".into() };
    assert!(a.equals(Some(&b)));

    let c = Price { value: "test".into(), amount: 1 };
    let d = Price { value: "test".into(), amount: 1 };
    assert!(c.equals(Some(&d)));
}

#[test]
fn not_equal_when_any_attribute_differs() {
    let a = Label { value: "test".into() };
    let b = Label { value: "test2".into() };
    assert!(!a.equals(Some(&b)));

    let c = Price { value: "test".into(), amount: 1 };
    let d = Price { value: "test".into(), amount: 2 };
    assert!(!c.equals(Some(&d)));
}

#[test]
fn not_equal_to_other_variant() {
    let label = Label { value: "test".into() };
    let price = Price { value: "test".into(), amount: 1 };
    assert!(!price.equals(Some(&label)));
    assert!(!label.equals(Some(&price)));
}

#[test]
fn not_equal_to_missing_value() {
    let label = Label { value: "test".into() };
    assert!(!label.equals::<Label>(None));
}

#[test]
fn nested_value_objects_compare_recursively() {
    let owner = EntityId::new();
    let a = Tagged {
        owner,
        labels: vec![Label { value: "x".into() }, Label { value: "y".into() }],
    };
    let same = a.clone();
    let reordered = Tagged {
        owner,
        labels: vec![Label { value: "y".into() }, Label { value: "x".into() }],
    };
    assert!(a.equals(Some(&same)));
    assert!(!a.equals(Some(&reordered)));
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn equality_is_reflexive(value in ".{0,32}", amount in any::<i64>()) {
        let price = Price { value, amount };
        prop_assert!(price.equals(Some(&price)));
    }

    #[test]
    fn equality_is_symmetric(
        a in "[a-c]{0,2}",
        b in "[a-c]{0,2}",
        x in 0i64..3,
        y in 0i64..3,
    ) {
        let left = Price { value: a, amount: x };
        let right = Price { value: b, amount: y };
        prop_assert_eq!(left.equals(Some(&right)), right.equals(Some(&left)));
    }

    #[test]
    fn never_equal_across_variants(value in ".{0,16}") {
        let label = Label { value: value.clone() };
        let price = Price { value, amount: 0 };
        prop_assert!(!label.equals(Some(&price)));
        prop_assert!(!label.equals::<Label>(None));
    }
}
