//! Traits describing the records a view operates on.
//!
//! The engine is generic over the record shape. It only needs a stable
//! identifier and a way to read a named field as a [`Value`], which is what
//! the [`Record`] trait provides. `#[derive(Record)]` from `tabview-macros`
//! implements it from field annotations.

use std::borrow::Cow;

use crate::value::{Timestamp, Value};

/// Trait for types that can be displayed in a table view.
///
/// # Manual Implementation
///
/// ```
/// use std::borrow::Cow;
/// use tabview::{Record, Value, Number};
///
/// struct Expense {
///     id: String,
///     description: String,
///     amount: f64,
/// }
///
/// impl Record for Expense {
///     const FIELDS: &'static [&'static str] = &["id", "description", "amount"];
///
///     fn record_id(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.id)
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::String(&self.id),
///             "description" => Value::String(&self.description),
///             "amount" => Value::Number(Number::F64(self.amount)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Fields that make up the searchable text of a record, in order.
    const FIELDS: &'static [&'static str];

    /// Stable unique identifier of this record.
    fn record_id(&self) -> Cow<'_, str>;

    /// Returns the value of a field, or [`Value::None`] if the field doesn't
    /// exist on this record.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Free-function form of [`Record::field_value`].
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

/// Categorical values exposed to the view by their display label.
///
/// The derive macro uses this for fields marked `#[record(Label)]`; the label
/// is what categorical filters compare against and what search sees.
///
/// ```
/// use tabview::RecordLabel;
///
/// enum Status {
///     Pending,
///     Approved,
/// }
///
/// impl RecordLabel for Status {
///     fn record_label(&self) -> &str {
///         match self {
///             Status::Pending => "PENDING",
///             Status::Approved => "APPROVED",
///         }
///     }
/// }
/// ```
pub trait RecordLabel {
    fn record_label(&self) -> &str;
}

/// Converts datetime-like fields to a [`Timestamp`].
///
/// Implemented for `i64` and `u64`, interpreted as milliseconds.
pub trait RecordTimestamp {
    fn record_timestamp(&self) -> Timestamp;
}

impl RecordTimestamp for i64 {
    fn record_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl RecordTimestamp for u64 {
    fn record_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self as i64)
    }
}
