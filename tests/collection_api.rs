//! Integration tests for the container API surface
//!
//! Exercises the documented end-to-end behaviors through the facade crate,
//! plus property tests for the invariants that must survive arbitrary
//! inputs: sorting preserves the key-value pairing and the value multiset.

use proptest::prelude::*;
use tabula::{Key, Mode, OrderedMap, PopulatePattern, Separator, SortRule, Value};

fn int_map(values: &[i64]) -> OrderedMap {
    OrderedMap::from(values.iter().map(|&i| Value::Int(i)).collect::<Vec<_>>())
}

#[test]
fn add_never_overwrites_update_never_inserts() {
    let mut map = OrderedMap::new();
    map.add("k", Value::Int(1))
        .add("k", Value::Int(2))
        .update("absent", Value::Int(3));
    assert_eq!(map.get("k"), Some(&Value::Int(1)));
    assert_eq!(map.len(), 1);
}

#[test]
fn splice_matches_documented_contract() {
    let mut map = int_map(&[1, 2, 3, 4, 5]);
    map.splice(1, 2, vec![Value::Int(9), Value::Int(9)]);
    assert_eq!(
        map.to_array(),
        vec![
            Value::Int(1),
            Value::Int(9),
            Value::Int(9),
            Value::Int(4),
            Value::Int(5)
        ]
    );
}

#[test]
fn statistics_contract() {
    assert_eq!(int_map(&[1, 2, 3]).median(), 2.0);
    assert_eq!(int_map(&[1, 2, 3, 4]).median(), 2.5);
    assert_eq!(OrderedMap::new().median(), 0.0);

    assert_eq!(int_map(&[1, 2, 2, 3]).mode(), Mode::Single(2.0));
    assert_eq!(int_map(&[1, 1, 2, 2]).mode(), Mode::Tied(vec![1.0, 2.0]));
}

#[test]
fn partition_truncates_to_requested_bucket_count() {
    // 5 values, 3 distinct classifier outputs, cutoff 2
    let map = int_map(&[0, 1, 2, 3, 4]);
    let buckets = map.partition(|v| Key::Index((v.as_int().unwrap() % 3) as usize), 2);
    assert_eq!(buckets.len(), 2);
}

#[test]
fn populate_then_reduce_pipeline() {
    let mut map = OrderedMap::new();
    map.populate(10, PopulatePattern::SequentialInteger);
    assert_eq!(map.sum(), 55.0);
    assert_eq!(map.min(), Some(1.0));
    assert_eq!(map.max(), Some(10.0));
    assert_eq!(map.join(Separator::Comma, false), "1,2,3,4,5,6,7,8,9,10");
}

#[test]
fn reverse_is_a_copy_chained_mutators_are_not() {
    let mut map = int_map(&[1, 2]);
    let reversed = map.reverse();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(reversed.len(), 2);
}

#[test]
fn json_mirrors_agree_with_contents() {
    let mut map = int_map(&[1, 2]);
    map.add("flag", Value::Bool(true));
    let json: serde_json::Value = serde_json::from_str(&map.to_json()).unwrap();
    assert_eq!(json["0"], serde_json::json!(1));
    assert_eq!(json["flag"], serde_json::json!(true));
    assert_eq!(map.to_array().len(), 3);
    assert_eq!(map.to_object().len(), 3);
}

proptest! {
    #[test]
    fn sort_preserves_pairing_and_multiset(values in prop::collection::vec(-1000i64..1000, 0..50)) {
        let mut map = int_map(&values);
        let pairs_before: Vec<(Key, Value)> = map
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect();

        map.sort(SortRule::ValueAscending);

        // Every original pair survives the reorder intact
        for (key, value) in &pairs_before {
            prop_assert_eq!(map.get(key.clone()), Some(value));
        }

        // Values come out ordered
        let sorted: Vec<i64> = map.to_array().iter().map(|v| v.as_int().unwrap()).collect();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn filter_never_renumbers_survivors(values in prop::collection::vec(0i64..100, 0..30)) {
        let mut map = int_map(&values);
        map.filter(|v| v.as_int().unwrap() % 2 == 0);
        for entry in map.iter() {
            let index = entry.key.as_index().unwrap();
            prop_assert_eq!(&Value::Int(values[index]), &entry.value);
        }
    }
}
