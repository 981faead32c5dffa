//! Sort rules and the mixed-type value ordering
//!
//! Value sorts must degrade gracefully across heterogeneous payloads:
//! numeric pairs compare numerically (Int widened to f64), string pairs
//! lexically, and everything else by a fixed variant rank. Ties keep their
//! pre-sort relative order — the container uses a stable sort throughout.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reordering rule consumed by [`OrderedMap::sort`](crate::OrderedMap::sort)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortRule {
    /// Order by value, ascending
    ValueAscending,
    /// Order by value, descending
    ValueDescending,
    /// Order by key, ascending (positional keys before associative)
    KeyAscending,
    /// Order by key, descending
    KeyDescending,
}

/// Variant rank used when two values are not directly comparable
fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::Map(_) => 4,
    }
}

/// Total order over heterogeneous values
///
/// - numeric vs numeric: `f64::total_cmp` after widening
/// - string vs string: lexical
/// - bool vs bool: `false < true`
/// - otherwise: variant rank (Null < Bool < numeric < String < Map);
///   same-rank incomparables (two maps) are ties
pub(crate) fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}
