//! Proc macros for Tabview.
//!
//! - [`Record`] - Generate the `tabview::Record` implementation from struct
//!   field annotations
//!
//! For working examples, see `reimburse/src/entity.rs` and
//! `reimburse/tests/record_derive.rs`.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for structs shown in a table view.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Text field, exposed as `Value::String` |
/// | `Number` | Numeric field, exposed as `Value::Number` |
/// | `Timestamp` | Datetime field - requires `RecordTimestamp` impl |
/// | `Bool` | Boolean field |
/// | `Label` | Categorical enum - requires `RecordLabel` impl |
/// | `id` | The record identifier (exactly one field, may be combined with a type) |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom field name |
///
/// Fields without a type are not visible to search, filters or sorting.
/// `Option<_>` fields yield `Value::None` when empty.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Claim::AMOUNT`)
/// 2. `Record::FIELDS`, the typed fields in declaration order
/// 3. `Record::record_id()` and `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use tabview::{Record, RecordLabel};
/// use tabview_macros::Record;
///
/// enum Status { Pending, Approved }
///
/// impl RecordLabel for Status {
///     fn record_label(&self) -> &str {
///         match self {
///             Status::Pending => "PENDING",
///             Status::Approved => "APPROVED",
///         }
///     }
/// }
///
/// #[derive(Record)]
/// struct Claim {
///     #[record(id, String)]
///     id: String,
///
///     #[record(Number)]
///     amount: f64,
///
///     #[record(Label)]
///     status: Status,
///
///     #[record(String, rename = "receipt")]
///     receipt_url: Option<String>,
/// }
///
/// let claim = Claim {
///     id: "r1".into(),
///     amount: 12.5,
///     status: Status::Pending,
///     receipt_url: None,
/// };
/// assert_eq!(Claim::FIELDS, &["id", "amount", "status", "receipt"]);
/// assert_eq!(claim.field_value(Claim::STATUS).as_str(), Some("PENDING"));
/// assert!(claim.field_value(Claim::RECEIPT).is_none());
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
