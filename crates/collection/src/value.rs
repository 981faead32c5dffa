//! Value payload for container entries
//!
//! This module defines `Value`, the closed tagged union every entry holds:
//! - Null, Bool, Int, Float, String, Map (a nested container)
//!
//! ## Type rules
//!
//! - No implicit coercions; different variants are NEVER equal:
//!   `Int(1) != Float(1.0)`.
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`.
//! - Statistics and sorting read `Int`/`Float` through [`Value::as_f64`];
//!   every other variant is skipped by numeric reductions.

use crate::map::OrderedMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dynamically-typed entry payload
///
/// Different variants are never equal, even when they look alike:
/// `Int(1) != Float(1.0)`, `String("1") != Int(1)`. Float comparisons use
/// IEEE-754 semantics through the derived `PartialEq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Nested container
    Map(Box<OrderedMap>),
}

impl Value {
    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Map(_) => "Map",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this is a nested container
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True for `Int` and `Float` — the subset statistics operate on
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a nested container if this is a Map value
    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric reading: `Int` widened to f64, `Float` as-is, `None` otherwise
    ///
    /// This is the single coercion point used by statistics and value sorts;
    /// it never applies to equality.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

// Rendering used by `OrderedMap::join`: Null is empty, nested maps render
// as their JSON form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Map(m) => write!(f, "{}", m.to_json()),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<OrderedMap> for Value {
    fn from(m: OrderedMap) -> Self {
        Value::Map(Box::new(m))
    }
}

// ============================================================================
// serde_json interop for ergonomic JSON construction
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64 range falls back to float
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                let values: Vec<Value> = arr.into_iter().map(Value::from).collect();
                Value::Map(Box::new(OrderedMap::from(values)))
            }
            serde_json::Value::Object(obj) => {
                let mut map = OrderedMap::new();
                for (k, v) in obj {
                    map.add(k, Value::from(v));
                }
                Value::Map(Box::new(map))
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Map(m) => m.to_json_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Int(1).type_name(), "Int");
        assert_eq!(Value::Float(1.0).type_name(), "Float");
        assert_eq!(Value::String(String::new()).type_name(), "String");
        assert_eq!(Value::Map(Box::new(OrderedMap::new())).type_name(), "Map");
    }

    #[test]
    fn test_int_not_equal_float() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_nan_not_equal_nan() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn test_null_not_equal_to_other_types() {
        assert_ne!(Value::Null, Value::Bool(false));
        assert_ne!(Value::Null, Value::Int(0));
        assert_ne!(Value::Null, Value::String(String::new()));
    }

    #[test]
    fn test_is_numeric() {
        assert!(Value::Int(1).is_numeric());
        assert!(Value::Float(1.5).is_numeric());
        assert!(!Value::String("1".into()).is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::Null.is_numeric());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Int(2).as_f64(), Some(2.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::String("2".into()).as_f64(), None);
    }

    #[test]
    fn test_as_wrong_type_returns_none() {
        let v = Value::Int(42);
        assert!(v.as_bool().is_none());
        assert!(v.as_str().is_none());
        assert!(v.as_map().is_none());

        let v = Value::String("hello".to_string());
        assert!(v.as_int().is_none());
        assert!(v.as_f64().is_none());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
        assert_eq!(Value::from(()), Value::Null);
        let v: Value = 2.5f32.into();
        assert_eq!(v.as_f64(), Some(2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        // `{}` renders integral floats without a fractional part
        assert_eq!(Value::Float(1.0).to_string(), "1");
        assert_eq!(Value::String("x".into()).to_string(), "x");
    }

    #[test]
    fn test_serde_roundtrip_all_variants() {
        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(42),
            Value::Float(3.25),
            Value::String("test".to_string()),
            Value::Map(Box::new(OrderedMap::from(vec![Value::Int(1)]))),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value, back);
        }
    }

    #[test]
    fn test_from_json_array_becomes_positional_map() {
        let json = serde_json::json!([1, "two", null]);
        let v: Value = json.into();
        let map = v.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(0usize), Some(&Value::Int(1)));
        assert_eq!(map.get(1usize), Some(&Value::String("two".into())));
        assert_eq!(map.get(2usize), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_object_becomes_associative_map() {
        let json = serde_json::json!({"a": 1, "b": [true]});
        let v: Value = json.into();
        let map = v.as_map().unwrap();
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        assert!(map.get("b").unwrap().is_map());
    }

    #[test]
    fn test_to_json_float_nan_becomes_null() {
        let json: serde_json::Value = Value::Float(f64::NAN).into();
        assert!(json.is_null());
    }

    #[test]
    fn test_json_u64_beyond_i64_becomes_float() {
        let json = serde_json::json!(u64::MAX);
        let v: Value = json.into();
        assert!(v.is_float());
    }
}
