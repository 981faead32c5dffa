//! OrderedMap: ordered, key-addressable container
//!
//! ## Design
//!
//! An `OrderedMap` is an ordered sequence of entries, each pairing a
//! [`Key`] (positional index or associative name) with a [`Value`].
//!
//! - Keys are unique within one map.
//! - Iteration order is insertion order until a sort, reverse, or shuffle
//!   establishes a new canonical order.
//! - Mutators take `&mut self` and return `&mut Self` for chaining.
//!   [`OrderedMap::reverse`] is the one exception: it builds a new map and
//!   leaves the receiver untouched.
//!
//! ## Positional vs associative discipline
//!
//! Positional operations (`prepend`, `insert_at`, `splice`, `concat`,
//! `shuffle`) renumber positional keys sequentially; associative keys stay
//! put. The associative entry points (`prepend_with_key`,
//! `insert_key_at`) splice an entry in without disturbing any other key.
//!
//! ## Thread safety
//!
//! Mutators are not safe for unsynchronized sharing of one instance.
//! Callers that need concurrent access should synchronize externally or
//! share immutable snapshots (`reverse`'s copy-on-return is the model).

use crate::key::Key;
use crate::separator::Separator;
use crate::sort::{compare_values, SortRule};
use crate::value::Value;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One (key, value) pair inside an [`OrderedMap`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry key, positional or associative
    pub key: Key,
    /// Entry payload
    pub value: Value,
}

impl Entry {
    /// Create a new entry
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}

/// Ordered sequence of unique-keyed entries
///
/// # Example
///
/// ```
/// use tabula_collection::{OrderedMap, Value};
///
/// let mut map = OrderedMap::from(vec![Value::Int(1), Value::Int(2)]);
/// map.add("label", Value::String("three".into()))
///     .update(0usize, Value::Int(10));
///
/// assert_eq!(map.get(0usize), Some(&Value::Int(10)));
/// assert_eq!(map.get("label"), Some(&Value::String("three".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedMap {
    entries: Vec<Entry>,
}

impl OrderedMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a map from explicit (key, value) pairs
    ///
    /// Later duplicates of a key are dropped, matching [`OrderedMap::add`].
    pub fn from_entries<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut map = Self::new();
        for (k, v) in pairs {
            map.add(k, v);
        }
        map
    }

    // ========== Read operations ==========

    /// Current entries in canonical order
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup by key; a miss is `None`, never an error
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let key = key.into();
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// First value in canonical order
    pub fn first(&self) -> Option<&Value> {
        self.entries.first().map(|e| &e.value)
    }

    /// Last value in canonical order
    pub fn last(&self) -> Option<&Value> {
        self.entries.last().map(|e| &e.value)
    }

    /// One uniformly-selected value; `None` when empty
    pub fn random(&self) -> Option<&Value> {
        if self.entries.is_empty() {
            return None;
        }
        let i = rand::thread_rng().gen_range(0..self.entries.len());
        Some(&self.entries[i].value)
    }

    // ========== Membership ==========

    /// Value membership by strict equality
    pub fn has(&self, value: &Value) -> bool {
        self.entries.iter().any(|e| &e.value == value)
    }

    /// Key membership
    pub fn has_key(&self, key: impl Into<Key>) -> bool {
        let key = key.into();
        self.entries.iter().any(|e| e.key == key)
    }

    /// True if any of the values is present (short-circuits)
    pub fn has_any(&self, values: &[Value]) -> bool {
        values.iter().any(|v| self.has(v))
    }

    /// True if every value is present (short-circuits)
    pub fn has_all(&self, values: &[Value]) -> bool {
        values.iter().all(|v| self.has(v))
    }

    /// True if any of the keys is present (short-circuits)
    pub fn has_any_key(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.entries.iter().any(|e| &e.key == k))
    }

    /// True if every key is present (short-circuits)
    pub fn has_all_keys(&self, keys: &[Key]) -> bool {
        keys.iter().all(|k| self.entries.iter().any(|e| &e.key == k))
    }

    // ========== Associative mutation ==========

    /// Insert only if `key` is absent; present keys are left untouched
    ///
    /// The no-overwrite rule is the deliberate asymmetry with
    /// [`OrderedMap::update`].
    pub fn add(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if !self.has_key(key.clone()) {
            self.entries.push(Entry::new(key, value.into()));
        }
        self
    }

    /// Mutate only if `key` is present; absent keys are a no-op
    pub fn update(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value.into();
        }
        self
    }

    /// Delete the entry if present; no-op otherwise
    ///
    /// Remaining keys are not renumbered; positional gaps are allowed.
    pub fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        let key = key.into();
        self.entries.retain(|e| e.key != key);
        self
    }

    // ========== Positional mutation ==========

    /// Insert `value` as the new position 0
    ///
    /// All positional keys are renumbered sequentially; associative keys
    /// are untouched.
    pub fn prepend(&mut self, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(0, Entry::new(Key::Index(0), value.into()));
        self.reindex_positional();
        self
    }

    /// Insert an associative entry at the front
    ///
    /// An existing entry under the same key is replaced and moves to the
    /// front. No positional renumbering happens.
    pub fn prepend_with_key(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        self.entries.retain(|e| e.key != key);
        self.entries.insert(0, Entry::new(key, value.into()));
        self
    }

    /// Positional splice-insert at `position` (clamped to the sequence)
    ///
    /// Positional keys of later entries shift; associative keys stay put.
    pub fn insert_at(&mut self, position: usize, value: impl Into<Value>) -> &mut Self {
        let position = position.min(self.entries.len());
        self.entries
            .insert(position, Entry::new(Key::Index(0), value.into()));
        self.reindex_positional();
        self
    }

    /// Split at `position` (clamped) and splice in an associative entry
    ///
    /// Every other key is left untouched. A duplicate key already sitting
    /// before `position` wins and the call no-ops; one at or after
    /// `position` is replaced and repositioned at `position`.
    pub fn insert_key_at(
        &mut self,
        position: usize,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> &mut Self {
        let key = key.into();
        let position = position.min(self.entries.len());
        if let Some(existing) = self.entries.iter().position(|e| e.key == key) {
            if existing < position {
                return self;
            }
            self.entries.remove(existing);
        }
        self.entries.insert(position, Entry::new(key, value.into()));
        self
    }

    /// Remove `length` entries at `offset`, splice in `replacement`
    ///
    /// Out-of-range bounds clamp rather than error. Positional keys are
    /// renumbered afterwards. Returns `&mut Self`; the removed segment is
    /// discarded — the source contract this reimplements never exposed it,
    /// and no consumer has asked for it since.
    pub fn splice(
        &mut self,
        offset: usize,
        length: usize,
        replacement: Vec<Value>,
    ) -> &mut Self {
        let offset = offset.min(self.entries.len());
        let length = length.min(self.entries.len() - offset);
        let tail: Vec<Entry> = replacement
            .into_iter()
            .map(|v| Entry::new(Key::Index(0), v))
            .collect();
        self.entries.splice(offset..offset + length, tail);
        self.reindex_positional();
        self
    }

    /// Append every source's entries to the end
    ///
    /// Positional entries get fresh positional indices; associative entries
    /// overwrite an existing entry of the same name in place, or append.
    /// Merge semantics — deliberately unlike [`OrderedMap::add`]'s
    /// no-overwrite rule.
    pub fn concat<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<OrderedMap>,
    {
        for source in sources {
            let source: OrderedMap = source.into();
            for entry in source.entries {
                match entry.key {
                    Key::Index(_) => {
                        self.entries.push(Entry::new(Key::Index(0), entry.value));
                    }
                    Key::Name(name) => {
                        let key = Key::Name(name);
                        match self.entries.iter_mut().find(|e| e.key == key) {
                            Some(existing) => existing.value = entry.value,
                            None => self.entries.push(Entry::new(key, entry.value)),
                        }
                    }
                }
            }
        }
        self.reindex_positional();
        self
    }

    /// Empty the container
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    // ========== Transformation ==========

    /// Replace each value with `f(value)`, preserving keys and order
    pub fn map(&mut self, f: impl Fn(&Value) -> Value) -> &mut Self {
        for entry in &mut self.entries {
            let next = f(&entry.value);
            entry.value = next;
        }
        self
    }

    /// Retain entries where `f(value)` is true
    ///
    /// Relative order and original keys of retained entries are preserved;
    /// positional gaps are allowed and not renumbered.
    pub fn filter(&mut self, f: impl Fn(&Value) -> bool) -> &mut Self {
        self.entries.retain(|e| f(&e.value));
        self
    }

    /// Fold the values in canonical order
    pub fn reduce<A>(&self, init: A, f: impl Fn(A, &Value) -> A) -> A {
        self.entries.iter().fold(init, |acc, e| f(acc, &e.value))
    }

    /// Invoke `f(value, key)` for side effects, in canonical order
    pub fn for_each(&self, mut f: impl FnMut(&Value, &Key)) {
        for entry in &self.entries {
            f(&entry.value, &entry.key);
        }
    }

    // ========== Reordering ==========

    /// Reorder canonical order, preserving key-value association
    ///
    /// Stable: ties keep their pre-sort relative order. Value comparison
    /// degrades gracefully across mixed types — see [`SortRule`].
    pub fn sort(&mut self, rule: SortRule) -> &mut Self {
        match rule {
            SortRule::ValueAscending => self
                .entries
                .sort_by(|a, b| compare_values(&a.value, &b.value)),
            SortRule::ValueDescending => self
                .entries
                .sort_by(|a, b| compare_values(&b.value, &a.value)),
            SortRule::KeyAscending => self.entries.sort_by(|a, b| a.key.cmp(&b.key)),
            SortRule::KeyDescending => self.entries.sort_by(|a, b| b.key.cmp(&a.key)),
        }
        self
    }

    /// New map with entries in reverse canonical order
    ///
    /// The receiver is not mutated. Positional keys in the copy are
    /// renumbered to match their new positions; associative keys carry over.
    pub fn reverse(&self) -> OrderedMap {
        let mut reversed = OrderedMap {
            entries: self.entries.iter().rev().cloned().collect(),
        };
        reversed.reindex_positional();
        reversed
    }

    /// Randomize canonical order in place
    ///
    /// Prior key/position correlation is discarded: every entry is re-keyed
    /// as a fresh positional sequence `0..n`, associative keys included.
    pub fn shuffle(&mut self) -> &mut Self {
        self.entries.shuffle(&mut rand::thread_rng());
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.key = Key::Index(i);
        }
        self
    }

    // ========== Rendering ==========

    /// Join rendered values (not keys) with a separator symbol
    ///
    /// With `padded`, the separator is surrounded by single spaces.
    pub fn join(&self, separator: Separator, padded: bool) -> String {
        let glue = if padded {
            format!(" {} ", separator.as_str())
        } else {
            separator.as_str().to_string()
        };
        self.entries
            .iter()
            .map(|e| e.value.to_string())
            .collect::<Vec<_>>()
            .join(&glue)
    }

    // ========== Internal ==========

    /// Renumber positional keys sequentially in canonical order
    ///
    /// Associative keys are untouched; positional entries receive
    /// consecutive indices in encounter order.
    pub(crate) fn reindex_positional(&mut self) {
        let mut next = 0usize;
        for entry in &mut self.entries {
            if entry.key.is_index() {
                entry.key = Key::Index(next);
                next += 1;
            }
        }
    }

    /// Append an entry without key checks; callers guarantee uniqueness
    pub(crate) fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

// Positional construction: values become entries keyed 0..n.
impl From<Vec<Value>> for OrderedMap {
    fn from(values: Vec<Value>) -> Self {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Entry::new(Key::Index(i), v))
                .collect(),
        }
    }
}

impl From<&OrderedMap> for OrderedMap {
    fn from(other: &OrderedMap) -> Self {
        other.clone()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.all().iter()
    }
}
