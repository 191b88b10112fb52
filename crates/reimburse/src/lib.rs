//! Reimbursement request table.
//!
//! The finance dashboard's reimbursement list, as a library and a CLI:
//!
//! - [`FinanceEntity`] - one request, derived as a `tabview` record
//! - [`Status`], [`Category`], [`SubmitterType`] - its categorical fields
//! - [`finance_columns`] - the table's columns and cell renderers
//! - [`render_page`] - fixed-width text output of a view page
//! - [`cli`] - the `reimburse` command
//!
//! ```rust
//! use reimburse::{finance_columns, FinanceEntity, Status};
//! use tabview::TableView;
//!
//! let records = FinanceEntity::list_from_json(r#"[{
//!     "id": "r1", "submitterId": "u1", "submitterType": "USER",
//!     "amount": 12.5, "description": "Pizza", "category": "Food",
//!     "street": "1 Main St", "city": "Amherst", "state": "MA",
//!     "postalCode": "01003", "status": "PENDING", "createdAt": 0,
//!     "hackathonId": "h1", "updatedBy": "u1"
//! }]"#).unwrap();
//!
//! let mut table = TableView::new(finance_columns().unwrap());
//! table.toggle_filter(FinanceEntity::STATUS, Status::Pending.label());
//!
//! let view = table.get_view(&records);
//! assert_eq!(view.total_filtered, 1);
//! assert_eq!(view.rows(table.columns())[0][1], "$12.50");
//! ```

pub mod cli;
mod columns;
mod entity;
mod kinds;
mod table;

pub use columns::{finance_columns, format_amount, NO_RECEIPT};
pub use entity::FinanceEntity;
pub use kinds::{Category, ParseKindError, Status, SubmitterType};
pub use table::{footer, render_page, truncate_to_width, EMPTY_MESSAGE, MAX_CELL_WIDTH};
