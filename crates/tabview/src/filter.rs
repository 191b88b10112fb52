//! Structured filter predicates.
//!
//! A [`FilterState`] narrows a record list before search and sort. It holds
//! two kinds of dimensions, each keyed by record field:
//!
//! - **Categorical**: a set of accepted values. The record's field text must
//!   be in the set. An empty set is never stored, so "no entry" means "accept
//!   everything".
//! - **Numeric**: an inclusive range with an optional lower and upper bound.
//!
//! A record passes when it satisfies every active dimension:
//!
//! ```text
//! pass = ∀ categorical (field ∈ accepted)
//!      ∧ ∀ numeric (min ≤ field ≤ max, for the bounds that are set)
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::record::Record;
use crate::value::Value;

/// Which end of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Min,
    Max,
}

/// Inclusive numeric range. Either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, n: f64) -> bool {
        self.min.map_or(true, |min| n >= min) && self.max.map_or(true, |max| n <= max)
    }

    fn set(&mut self, bound: Bound, value: Option<f64>) {
        match bound {
            Bound::Min => self.min = value,
            Bound::Max => self.max = value,
        }
    }
}

/// The active predicate set of a view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    categorical: BTreeMap<String, BTreeSet<String>>,
    numeric: BTreeMap<String, Range>,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Toggles `value` in the accepted set of `field`.
    ///
    /// Returns `true` if the value is now selected. Toggling the same value
    /// twice restores the previous state exactly.
    pub fn toggle(&mut self, field: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let accepted = self.categorical.entry(field.to_string()).or_default();
        let selected = if accepted.remove(&value) {
            false
        } else {
            accepted.insert(value);
            true
        };
        if accepted.is_empty() {
            self.categorical.remove(field);
        }
        selected
    }

    /// Sets or clears one bound of the numeric range on `field`.
    ///
    /// `None` and non-finite values clear the bound. A range with both ends
    /// open is removed.
    pub fn set_bound(&mut self, field: &str, bound: Bound, value: Option<f64>) {
        let value = value.filter(|v| v.is_finite());
        let range = self.numeric.entry(field.to_string()).or_default();
        range.set(bound, value);
        if range.is_open() {
            self.numeric.remove(field);
        }
    }

    /// Sets a bound from user input.
    ///
    /// Blank input clears the bound. Input that isn't a finite number also
    /// clears it, so bad input never hides every row, and the error is
    /// returned for the caller's information.
    pub fn set_bound_input(&mut self, field: &str, bound: Bound, input: &str) -> Result<()> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.set_bound(field, bound, None);
            return Ok(());
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                self.set_bound(field, bound, Some(n));
                Ok(())
            }
            _ => {
                self.set_bound(field, bound, None);
                Err(ViewError::MalformedNumericBound {
                    field: field.to_string(),
                    input: input.to_string(),
                })
            }
        }
    }

    /// Clears every dimension.
    pub fn reset(&mut self) {
        self.categorical.clear();
        self.numeric.clear();
    }

    /// Returns `true` when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.categorical.is_empty() && self.numeric.is_empty()
    }

    /// Accepted values for `field`, in sorted order. Empty when unconstrained.
    pub fn selected(&self, field: &str) -> impl Iterator<Item = &str> {
        self.categorical
            .get(field)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.categorical
            .get(field)
            .is_some_and(|set| set.contains(value))
    }

    /// The numeric range on `field`, if any bound is set.
    pub fn range(&self, field: &str) -> Option<Range> {
        self.numeric.get(field).copied()
    }

    /// Returns `true` if `record` satisfies every active dimension.
    ///
    /// A record whose field isn't numeric fails an active numeric range.
    pub fn evaluate<T: Record>(&self, record: &T) -> bool {
        let categorical_pass = self.categorical.iter().all(|(field, accepted)| {
            let text = record.field_value(field).to_text();
            accepted.contains(&*text)
        });

        if !categorical_pass {
            return false;
        }

        self.numeric
            .iter()
            .all(|(field, range)| match record.field_value(field) {
                Value::Number(n) => range.contains(n.to_f64()),
                Value::Timestamp(t) => range.contains(t.as_millis() as f64),
                _ => false,
            })
    }

    /// Number of constrained dimensions.
    pub fn active_count(&self) -> usize {
        self.categorical.len() + self.numeric.len()
    }

    /// Human-readable summary, e.g. `status in [APPROVED, PENDING]; amount >= 15`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .categorical
            .iter()
            .map(|(field, accepted)| {
                let values: Vec<&str> = accepted.iter().map(String::as_str).collect();
                format!("{} in [{}]", field, values.join(", "))
            })
            .collect();

        for (field, range) in &self.numeric {
            match (range.min, range.max) {
                (Some(min), Some(max)) => parts.push(format!("{} <= {} <= {}", min, field, max)),
                (Some(min), None) => parts.push(format!("{} >= {}", field, min)),
                (None, Some(max)) => parts.push(format!("{} <= {}", field, max)),
                (None, None) => {}
            }
        }

        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::Number;

    struct Claim {
        id: u32,
        status: &'static str,
        category: &'static str,
        amount: f64,
    }

    impl Record for Claim {
        const FIELDS: &'static [&'static str] = &["status", "category", "amount"];

        fn record_id(&self) -> Cow<'_, str> {
            Cow::Owned(self.id.to_string())
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "status" => Value::String(self.status),
                "category" => Value::String(self.category),
                "amount" => Value::Number(Number::F64(self.amount)),
                _ => Value::None,
            }
        }
    }

    fn claim(status: &'static str, category: &'static str, amount: f64) -> Claim {
        Claim {
            id: 0,
            status,
            category,
            amount,
        }
    }

    #[test]
    fn empty_state_accepts_everything() {
        let state = FilterState::new();
        assert!(state.is_empty());
        assert!(state.evaluate(&claim("PENDING", "Food", 10.0)));
    }

    #[test]
    fn toggle_is_symmetric() {
        let mut state = FilterState::new();
        assert!(state.toggle("status", "PENDING"));
        assert!(state.is_selected("status", "PENDING"));
        assert!(!state.toggle("status", "PENDING"));
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn categorical_membership() {
        let mut state = FilterState::new();
        state.toggle("status", "PENDING");
        state.toggle("status", "APPROVED");

        assert!(state.evaluate(&claim("PENDING", "Food", 1.0)));
        assert!(state.evaluate(&claim("APPROVED", "Food", 1.0)));
        assert!(!state.evaluate(&claim("REJECTED", "Food", 1.0)));
        assert_eq!(state.selected("status").collect::<Vec<_>>(), vec!["APPROVED", "PENDING"]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let mut state = FilterState::new();
        state.toggle("status", "PENDING");
        state.toggle("category", "Food");

        assert!(state.evaluate(&claim("PENDING", "Food", 1.0)));
        assert!(!state.evaluate(&claim("PENDING", "Postage", 1.0)));
        assert!(!state.evaluate(&claim("APPROVED", "Food", 1.0)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut state = FilterState::new();
        state.set_bound("amount", Bound::Min, Some(10.0));
        state.set_bound("amount", Bound::Max, Some(20.0));

        assert!(!state.evaluate(&claim("PENDING", "Food", 9.99)));
        assert!(state.evaluate(&claim("PENDING", "Food", 10.0)));
        assert!(state.evaluate(&claim("PENDING", "Food", 20.0)));
        assert!(!state.evaluate(&claim("PENDING", "Food", 20.01)));
    }

    #[test]
    fn clearing_both_bounds_removes_range() {
        let mut state = FilterState::new();
        state.set_bound("amount", Bound::Min, Some(1.0));
        state.set_bound("amount", Bound::Min, None);
        assert!(state.range("amount").is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn zero_is_a_real_bound() {
        let mut state = FilterState::new();
        state.set_bound_input("amount", Bound::Max, "0").unwrap();
        assert_eq!(state.range("amount").unwrap().max, Some(0.0));
        assert!(!state.evaluate(&claim("PENDING", "Food", 0.5)));
    }

    #[test]
    fn blank_input_clears() {
        let mut state = FilterState::new();
        state.set_bound_input("amount", Bound::Min, "15").unwrap();
        state.set_bound_input("amount", Bound::Min, "  ").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn malformed_input_clears_and_reports() {
        let mut state = FilterState::new();
        state.set_bound_input("amount", Bound::Min, "15").unwrap();

        let err = state.set_bound_input("amount", Bound::Min, "fifteen");
        assert!(matches!(err, Err(ViewError::MalformedNumericBound { .. })));
        assert!(state.is_empty());
        assert!(state.evaluate(&claim("PENDING", "Food", 1.0)));

        assert!(state.set_bound_input("amount", Bound::Max, "NaN").is_err());
        assert!(state.set_bound_input("amount", Bound::Max, "inf").is_err());
        assert!(state.is_empty());
    }

    #[test]
    fn non_numeric_field_fails_active_range() {
        let mut state = FilterState::new();
        state.set_bound("status", Bound::Min, Some(0.0));
        assert!(!state.evaluate(&claim("PENDING", "Food", 1.0)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = FilterState::new();
        state.toggle("status", "PENDING");
        state.set_bound("amount", Bound::Max, Some(1.0));
        assert_eq!(state.active_count(), 2);

        state.reset();
        assert!(state.is_empty());
        assert!(state.evaluate(&claim("REJECTED", "Food", 500.0)));
    }

    #[test]
    fn summary_lists_constraints() {
        let mut state = FilterState::new();
        state.toggle("status", "PENDING");
        state.toggle("status", "APPROVED");
        state.set_bound("amount", Bound::Min, Some(15.0));
        assert_eq!(state.summary(), "status in [APPROVED, PENDING]; amount >= 15");
    }
}
