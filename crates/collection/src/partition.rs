//! Bucketed partitioning of a container's values
//!
//! `partition` classifies every value into a keyed bucket and returns a new
//! map holding only the first `bucket_count` buckets in creation order.
//! The truncation is deliberate: buckets beyond the cutoff are silently
//! dropped, regardless of size. This is NOT a top-N-by-size selection.

use crate::key::Key;
use crate::map::{Entry, OrderedMap};
use crate::value::Value;

impl OrderedMap {
    /// Bucket values by a classifier, keeping the first `bucket_count` buckets
    ///
    /// The classifier maps each value to a bucket key; values are appended
    /// to their bucket in canonical order, buckets are created in first-seen
    /// order. Each bucket in the returned map is a nested container of its
    /// members under fresh positional keys. Positional bucket keys are
    /// renumbered sequentially in the result; associative bucket keys are
    /// preserved. The receiver is not mutated.
    ///
    /// Classifier panics propagate to the caller unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use tabula_collection::{Key, OrderedMap, Value};
    ///
    /// let map = OrderedMap::from((1..=5).map(Value::Int).collect::<Vec<_>>());
    /// let buckets = map.partition(
    ///     |v| {
    ///         if v.as_int().unwrap() % 2 == 0 {
    ///             Key::from("even")
    ///         } else {
    ///             Key::from("odd")
    ///         }
    ///     },
    ///     2,
    /// );
    /// assert_eq!(buckets.len(), 2);
    /// assert_eq!(buckets.get("odd").unwrap().as_map().unwrap().len(), 3);
    /// ```
    pub fn partition<F>(&self, classifier: F, bucket_count: usize) -> OrderedMap
    where
        F: Fn(&Value) -> Key,
    {
        let mut buckets: Vec<(Key, Vec<Value>)> = Vec::new();
        for entry in self.iter() {
            let bucket_key = classifier(&entry.value);
            match buckets.iter_mut().find(|(k, _)| *k == bucket_key) {
                Some((_, members)) => members.push(entry.value.clone()),
                None => buckets.push((bucket_key, vec![entry.value.clone()])),
            }
        }

        let mut result = OrderedMap::new();
        for (key, members) in buckets.into_iter().take(bucket_count) {
            result.push_entry(Entry::new(key, Value::from(OrderedMap::from(members))));
        }
        result.reindex_positional();
        result
    }
}
