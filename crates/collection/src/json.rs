//! JSON and plain-structure mirrors of a container's contents
//!
//! A map whose keys read as the exact positional sequence `0..n` serializes
//! as a JSON array; anything else (associative keys, or positional gaps
//! left by `filter`/`remove`) serializes as a JSON object with stringified
//! keys.

use crate::key::Key;
use crate::map::OrderedMap;
use crate::value::Value;

impl OrderedMap {
    /// True when keys are the exact positional sequence `0..n` in order
    fn is_list(&self) -> bool {
        self.iter()
            .enumerate()
            .all(|(i, e)| e.key == Key::Index(i))
    }

    /// Structured-data form of the contents
    ///
    /// Array form for list-shaped maps, object form otherwise.
    pub fn to_json_value(&self) -> serde_json::Value {
        if self.is_list() {
            serde_json::Value::Array(
                self.iter()
                    .map(|e| serde_json::Value::from(e.value.clone()))
                    .collect(),
            )
        } else {
            serde_json::Value::Object(self.to_object())
        }
    }

    /// JSON text form of the contents
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Values in canonical order, as a plain list
    pub fn to_array(&self) -> Vec<Value> {
        self.iter().map(|e| e.value.clone()).collect()
    }

    /// Record-like form: keys stringified, values as JSON values
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .map(|e| (e.key.to_string(), serde_json::Value::from(e.value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shape_serializes_as_array() {
        let map = OrderedMap::from(vec![Value::Int(1), Value::String("two".into())]);
        assert_eq!(map.to_json(), r#"[1,"two"]"#);
    }

    #[test]
    fn test_associative_keys_serialize_as_object() {
        let map = OrderedMap::from_entries([("a", Value::Int(1))]);
        assert_eq!(map.to_json(), r#"{"a":1}"#);
    }

    #[test]
    fn test_positional_gap_forces_object_form() {
        let mut map = OrderedMap::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        map.remove(1usize);
        let json: serde_json::Value = serde_json::from_str(&map.to_json()).unwrap();
        assert!(json.is_object());
        assert_eq!(json["0"], serde_json::json!(1));
        assert_eq!(json["2"], serde_json::json!(3));
    }

    #[test]
    fn test_nested_map_serializes_inline() {
        let inner = OrderedMap::from(vec![Value::Int(1), Value::Int(2)]);
        let map = OrderedMap::from_entries([("nested", Value::from(inner))]);
        assert_eq!(map.to_json(), r#"{"nested":[1,2]}"#);
    }

    #[test]
    fn test_empty_map_is_an_array() {
        assert_eq!(OrderedMap::new().to_json(), "[]");
    }

    #[test]
    fn test_to_array_returns_values_in_order() {
        let map = OrderedMap::from_entries([("a", Value::Int(1)), ("b", Value::Int(2))]);
        assert_eq!(map.to_array(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_to_object_stringifies_keys() {
        let mut map = OrderedMap::from(vec![Value::Int(10)]);
        map.add("k", Value::Bool(true));
        let obj = map.to_object();
        assert_eq!(obj.get("0"), Some(&serde_json::json!(10)));
        assert_eq!(obj.get("k"), Some(&serde_json::json!(true)));
    }
}
