//! Numeric reductions over the container's values
//!
//! Every reduction operates on the numeric subset only: `Int` and `Float`
//! values, widened to f64 through [`Value::as_f64`]. Non-numeric values are
//! skipped without affecting the result. Frequencies for [`OrderedMap::mode`]
//! count over numeric equality, so `Int(2)` and `Float(2.0)` tally together.
//!
//! Empty-subset results:
//! - `sum` and `median` return `0.0`
//! - `min`/`max` return `None` (the documented absence sentinel)
//! - `mode` returns `Mode::Single(0.0)`

use crate::map::OrderedMap;
use serde::{Deserialize, Serialize};

/// Result of [`OrderedMap::mode`]
///
/// The return shape is genuinely polymorphic: one value when a unique
/// maximum frequency exists, the ordered list of tied values otherwise.
/// Modeled as a tagged union rather than coerced to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// A unique most-frequent value (also the empty-subset result, `0.0`)
    Single(f64),
    /// All values tied for maximum frequency, in first-seen order
    Tied(Vec<f64>),
}

impl OrderedMap {
    /// Collect the numeric subset in canonical order
    fn numeric_values(&self) -> Vec<f64> {
        self.iter().filter_map(|e| e.value.as_f64()).collect()
    }

    /// Sum of numeric values; non-numerics contribute zero
    pub fn sum(&self) -> f64 {
        self.iter().map(|e| e.value.as_f64().unwrap_or(0.0)).sum()
    }

    /// Smallest numeric value; `None` when no numeric value exists
    pub fn min(&self) -> Option<f64> {
        self.iter()
            .filter_map(|e| e.value.as_f64())
            .reduce(f64::min)
    }

    /// Largest numeric value; `None` when no numeric value exists
    pub fn max(&self) -> Option<f64> {
        self.iter()
            .filter_map(|e| e.value.as_f64())
            .reduce(f64::max)
    }

    /// Median of the numeric subset; `0.0` when the subset is empty
    ///
    /// Middle element for odd counts, arithmetic mean of the two middle
    /// elements for even counts.
    pub fn median(&self) -> f64 {
        let mut numbers = self.numeric_values();
        if numbers.is_empty() {
            return 0.0;
        }
        numbers.sort_by(f64::total_cmp);
        let count = numbers.len();
        if count % 2 == 1 {
            numbers[count / 2]
        } else {
            (numbers[count / 2 - 1] + numbers[count / 2]) / 2.0
        }
    }

    /// Most frequent numeric value(s)
    ///
    /// A unique maximum frequency yields `Mode::Single`; ties yield
    /// `Mode::Tied` in first-seen order. Empty subset: `Mode::Single(0.0)`.
    pub fn mode(&self) -> Mode {
        let numbers = self.numeric_values();
        if numbers.is_empty() {
            return Mode::Single(0.0);
        }
        // First-seen frequency table; linear scan keeps f64 out of hash keys
        let mut frequency: Vec<(f64, usize)> = Vec::new();
        for n in numbers {
            match frequency.iter_mut().find(|(v, _)| v.total_cmp(&n).is_eq()) {
                Some((_, count)) => *count += 1,
                None => frequency.push((n, 1)),
            }
        }
        let max_freq = frequency.iter().map(|(_, c)| *c).max().unwrap_or(0);
        let modes: Vec<f64> = frequency
            .iter()
            .filter(|(_, c)| *c == max_freq)
            .map(|(v, _)| *v)
            .collect();
        if modes.len() == 1 {
            Mode::Single(modes[0])
        } else {
            Mode::Tied(modes)
        }
    }
}
