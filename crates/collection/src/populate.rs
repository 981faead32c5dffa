//! Synthetic population of a container
//!
//! `populate` discards the current contents and regenerates values by a
//! fixed pattern. Generated keys are positional `0..count-1` for every
//! pattern.

use crate::map::OrderedMap;
use crate::value::Value;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 52-letter mixed-case alphabet cycled by the sequential-string pattern
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Hex token length produced by the random-string patterns (5 random bytes)
const HEX_TOKEN_BYTES: usize = 5;

/// Exclusive upper bound of the random-float pattern
///
/// The pattern draws integer-valued floats; the bound is fixed at 2^31 so
/// the distribution is platform-independent.
const RANDOM_FLOAT_BOUND: i64 = 1 << 31;

/// Generation pattern consumed by [`OrderedMap::populate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopulatePattern {
    /// `Int(1), Int(2), ..., Int(count)`
    SequentialInteger,
    /// One-character strings cycling A..Z then a..z by index modulo 52
    SequentialString,
    /// `Float(1.0), Float(2.0), ..., Float(count)`
    SequentialFloat,
    /// Uniform `Int` in `[1, 100]`
    RandomInteger,
    /// 10-character lowercase hex token
    RandomString,
    /// Uniform integer-valued `Float` in `[0, 2^31)`
    RandomFloat,
    /// Generic randomness; identical to `RandomString`
    Random,
}

/// Render random bytes as a lowercase hex token
fn hex_token(rng: &mut impl Rng) -> String {
    (0..HEX_TOKEN_BYTES)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect()
}

impl OrderedMap {
    /// Replace the contents with `count` synthetically generated values
    ///
    /// Every pattern keys its output positionally as `0..count-1`.
    pub fn populate(&mut self, count: usize, pattern: PopulatePattern) -> &mut Self {
        let mut rng = rand::thread_rng();
        let values: Vec<Value> = match pattern {
            PopulatePattern::SequentialInteger => {
                (1..=count as i64).map(Value::Int).collect()
            }
            PopulatePattern::SequentialString => (0..count)
                .map(|i| {
                    let ch = ALPHABET[i % ALPHABET.len()] as char;
                    Value::String(ch.to_string())
                })
                .collect(),
            PopulatePattern::SequentialFloat => {
                (1..=count as i64).map(|i| Value::Float(i as f64)).collect()
            }
            PopulatePattern::RandomInteger => (0..count)
                .map(|_| Value::Int(rng.gen_range(1..=100)))
                .collect(),
            PopulatePattern::RandomString | PopulatePattern::Random => {
                (0..count).map(|_| Value::String(hex_token(&mut rng))).collect()
            }
            PopulatePattern::RandomFloat => (0..count)
                .map(|_| Value::Float(rng.gen_range(0..RANDOM_FLOAT_BOUND) as f64))
                .collect(),
        };
        *self = OrderedMap::from(values);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    fn assert_positional_keys(map: &OrderedMap, count: usize) {
        let keys: Vec<Key> = map.iter().map(|e| e.key.clone()).collect();
        assert_eq!(keys, (0..count).map(Key::Index).collect::<Vec<_>>());
    }

    #[test]
    fn test_sequential_integer() {
        let mut map = OrderedMap::new();
        map.populate(5, PopulatePattern::SequentialInteger);
        let values: Vec<Value> = map.iter().map(|e| e.value.clone()).collect();
        assert_eq!(values, (1..=5).map(Value::Int).collect::<Vec<_>>());
        assert_positional_keys(&map, 5);
    }

    #[test]
    fn test_sequential_string_cycles_alphabet() {
        let mut map = OrderedMap::new();
        map.populate(54, PopulatePattern::SequentialString);
        assert_eq!(map.get(0usize), Some(&Value::String("A".into())));
        assert_eq!(map.get(25usize), Some(&Value::String("Z".into())));
        assert_eq!(map.get(26usize), Some(&Value::String("a".into())));
        assert_eq!(map.get(51usize), Some(&Value::String("z".into())));
        // Wraps back to the start
        assert_eq!(map.get(52usize), Some(&Value::String("A".into())));
        assert_positional_keys(&map, 54);
    }

    #[test]
    fn test_sequential_float() {
        let mut map = OrderedMap::new();
        map.populate(3, PopulatePattern::SequentialFloat);
        assert_eq!(map.get(0usize), Some(&Value::Float(1.0)));
        assert_eq!(map.get(2usize), Some(&Value::Float(3.0)));
    }

    #[test]
    fn test_random_integer_range() {
        let mut map = OrderedMap::new();
        map.populate(100, PopulatePattern::RandomInteger);
        for entry in map.iter() {
            let n = entry.value.as_int().unwrap();
            assert!((1..=100).contains(&n));
        }
        assert_positional_keys(&map, 100);
    }

    #[test]
    fn test_random_string_is_ten_hex_chars() {
        let mut map = OrderedMap::new();
        map.populate(10, PopulatePattern::RandomString);
        for entry in map.iter() {
            let s = entry.value.as_str().unwrap();
            assert_eq!(s.len(), 10);
            assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        }
    }

    #[test]
    fn test_random_generic_matches_random_string_shape() {
        let mut map = OrderedMap::new();
        map.populate(10, PopulatePattern::Random);
        for entry in map.iter() {
            assert_eq!(entry.value.as_str().unwrap().len(), 10);
        }
    }

    #[test]
    fn test_random_float_bounds_and_integrality() {
        let mut map = OrderedMap::new();
        map.populate(50, PopulatePattern::RandomFloat);
        for entry in map.iter() {
            let f = entry.value.as_f64().unwrap();
            assert!(f >= 0.0 && f < (1i64 << 31) as f64);
            assert_eq!(f.fract(), 0.0);
        }
    }

    #[test]
    fn test_populate_discards_existing_contents() {
        let mut map = OrderedMap::from_entries([("old", Value::Bool(true))]);
        map.populate(2, PopulatePattern::SequentialInteger);
        assert_eq!(map.len(), 2);
        assert!(!map.has_key("old"));
    }
}
