//! Entry keys for the ordered container
//!
//! A key is either positional (a non-negative index assigned by position)
//! or associative (a stable string label). Positional keys are subject to
//! re-indexing when positional inserts, removals, or splices shift the
//! sequence; associative keys never move on their own.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Key of an [`Entry`](crate::Entry): positional index or associative name
///
/// The two forms follow different disciplines:
/// - `Index` keys are renumbered by positional operations
///   (`prepend`, `insert_at`, `splice`, `concat`, `shuffle`).
/// - `Name` keys are stable under positional churn elsewhere in the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Positional key, assigned by sequence position
    Index(usize),
    /// Associative key, a stable string label
    Name(String),
}

impl Key {
    /// True for positional keys
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// True for associative keys
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Get the index if this is a positional key
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Get the label if this is an associative key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }
}

// Ordering used by key sorts: positional keys first (numerically),
// associative keys after (lexically).
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a.cmp(b),
            (Key::Name(a), Key::Name(b)) => a.cmp(b),
            (Key::Index(_), Key::Name(_)) => Ordering::Less,
            (Key::Name(_), Key::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}
