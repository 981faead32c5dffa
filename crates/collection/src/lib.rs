//! Ordered, key-addressable container with statistics and partitioning
//!
//! This crate provides [`OrderedMap`], an ordered sequence of unique-keyed
//! entries that behaves like an array and a map at once:
//! - positional and associative mutation (`add`, `update`, `prepend`,
//!   `insert_at`, `splice`, `concat`, ...)
//! - reordering (`sort`, `reverse`, `shuffle`)
//! - numeric reductions over the numeric-valued subset
//!   (`sum`, `min`, `max`, `median`, `mode`)
//! - bucketed partitioning and synthetic population
//! - JSON and plain-structure mirrors (`to_json`, `to_array`, `to_object`)
//!
//! Entries hold a closed tagged [`Value`] union (Null, Bool, Int, Float,
//! String, nested Map), keyed by a positional index or an associative name
//! ([`Key`]).
//!
//! # Quick start
//!
//! ```
//! use tabula_collection::{OrderedMap, SortRule, Value};
//!
//! let mut map = OrderedMap::from(vec![Value::Int(3), Value::Int(1)]);
//! map.add("label", Value::String("two".into()))
//!     .sort(SortRule::ValueAscending);
//!
//! // Keys ride along with their values through the sort
//! assert_eq!(map.sum(), 4.0);
//! assert_eq!(map.to_json(), r#"{"1":1,"0":3,"label":"two"}"#);
//! ```
//!
//! All operations are synchronous and single-threaded; mutators on a shared
//! instance must be synchronized externally.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;
pub mod key;
pub mod map;
pub mod partition;
pub mod populate;
pub mod separator;
pub mod sort;
pub mod stats;
pub mod value;

pub use key::Key;
pub use map::{Entry, OrderedMap};
pub use populate::PopulatePattern;
pub use separator::Separator;
pub use sort::SortRule;
pub use stats::Mode;
pub use value::Value;
