//! Sort direction, sort state and the record comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::record::Record;
use crate::value::{Number, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The active sort of a view: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub dir: Dir,
}

impl SortState {
    pub fn new(column: impl Into<String>, dir: Dir) -> Self {
        SortState {
            column: column.into(),
            dir,
        }
    }
}

/// Compares two field values in ascending order.
///
/// Missing values come first, then numeric values (numbers or timestamps)
/// in numeric order, then everything else as lowercased text by Unicode
/// code point, which is locale-independent.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b))
}

/// Compares two records by `column` in direction `dir`.
///
/// A custom comparator on the column takes precedence and its result is
/// returned unchanged.
pub fn compare_records<T: Record>(a: &T, b: &T, column: &Column<T>, dir: Dir) -> Ordering {
    if let Some(compare) = column.comparator() {
        return compare(a, b, dir);
    }
    let id = column.id();
    dir.apply(compare_values(&a.field_value(id), &b.field_value(id)))
}

/// Sort key for the default comparator, ranked in variant order.
enum SortKey {
    Missing,
    Number(Number),
    Text(String),
}

impl SortKey {
    fn of(value: &Value<'_>) -> SortKey {
        match value {
            Value::None => SortKey::Missing,
            Value::Number(n) => SortKey::Number(*n),
            Value::Timestamp(t) => SortKey::Number(Number::I64(t.as_millis())),
            other => SortKey::Text(other.to_text().to_lowercase()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(*b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Stable-sorts `items` by `column` in direction `dir`.
///
/// Records with equal keys keep their relative order. The default comparator
/// computes each key once and orders them like [`compare_values`].
pub fn sort_records<T: Record>(items: &mut Vec<&T>, column: &Column<T>, dir: Dir) {
    if let Some(compare) = column.comparator() {
        items.sort_by(|a, b| compare(*a, *b, dir));
        return;
    }

    let id = column.id();
    let mut keyed: Vec<(SortKey, &T)> = items
        .drain(..)
        .map(|record| (SortKey::of(&record.field_value(id)), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| dir.apply(a.compare(b)));
    items.extend(keyed.into_iter().map(|(_, record)| record));
}
