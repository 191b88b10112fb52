//! Tabview - Search, sort, filter and paginate in-memory record lists.
//!
//! Tabview is the state engine behind an interactive data table. It owns no
//! records and draws nothing: given a slice of records and the current user
//! selections it produces the page of rows to display.
//!
//! - Free-text search across every displayed field, case-insensitive
//! - Click-to-sort columns with custom comparators
//! - Categorical filters and inclusive numeric ranges
//! - Pagination with a fixed set of page sizes
//!
//! # Quick Start
//!
//! ```rust
//! use std::borrow::Cow;
//! use tabview::{Column, ColumnSpec, Number, Record, TableView, Value};
//!
//! struct Claim {
//!     id: u32,
//!     description: String,
//!     status: &'static str,
//!     amount: f64,
//! }
//!
//! impl Record for Claim {
//!     const FIELDS: &'static [&'static str] = &["description", "status", "amount"];
//!
//!     fn record_id(&self) -> Cow<'_, str> {
//!         Cow::Owned(self.id.to_string())
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "description" => Value::String(&self.description),
//!             "status" => Value::String(self.status),
//!             "amount" => Value::Number(Number::F64(self.amount)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let claims = vec![
//!     Claim { id: 1, description: "Pizza".into(), status: "PENDING", amount: 42.5 },
//!     Claim { id: 2, description: "Stickers".into(), status: "APPROVED", amount: 12.0 },
//!     Claim { id: 3, description: "Pizza again".into(), status: "APPROVED", amount: 30.0 },
//! ];
//!
//! let columns = ColumnSpec::new(vec![
//!     Column::new("description", "Description").sortable(),
//!     Column::new("amount", "Amount").sortable(),
//! ])
//! .unwrap();
//!
//! let mut table = TableView::new(columns);
//! table.set_search_query("PIZZA");
//! table.sort_by("amount").unwrap();
//!
//! let view = table.get_view(&claims);
//! let ids: Vec<u32> = view.visible.iter().map(|c| c.id).collect();
//! assert_eq!(ids, vec![3, 1]);
//! ```
//!
//! # Pipeline
//!
//! Every call to [`TableView::get_view`] recomputes the page from scratch:
//!
//! ```text
//! visible = paginate(sort(search(filter(records))))
//! ```
//!
//! | Stage | Semantics |
//! |-------|-----------|
//! | Filter | Every categorical set and numeric range must pass (AND) |
//! | Search | Lowercased query is a substring of the record's field text |
//! | Sort | Stable; missing values, then numbers, then lowercased text |
//! | Paginate | Page index clamped to the last page; at least one page |
//!
//! # Records
//!
//! Implement [`Record`] by hand as above, or derive it with
//! `#[derive(Record)]` from the `tabview-macros` crate.

mod column;
mod config;
mod error;
mod filter;
mod ordering;
mod page;
mod record;
mod search;
mod value;
mod view;

// Re-export public API
pub use column::{Column, ColumnDef, ColumnSpec, RenderFn, SortFn};
pub use config::ViewConfig;
pub use error::{Result, ViewError};
pub use filter::{Bound, FilterState, Range};
pub use ordering::{compare_records, compare_values, sort_records, Dir, SortState};
pub use page::{
    paginate, Page, PageSizePolicy, PageSizes, Pagination, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES,
};
pub use record::{Record, RecordLabel, RecordTimestamp};
pub use search::{matches, serialize_record, SearchQuery, FIELD_SEPARATOR};
pub use value::{Number, Timestamp, Value};
pub use view::{TableView, View};
