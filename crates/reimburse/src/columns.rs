//! Column specification of the reimbursement table.

use tabview::{Column, ColumnSpec, Result};

use crate::entity::FinanceEntity;

/// Shown in the Receipt column when a request has no receipt.
pub const NO_RECEIPT: &str = "—";

/// Formats an amount as dollars with two decimals, e.g. `$42.50`.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// The columns of the reimbursement table, in display order.
///
/// Submitter, Amount, Description, Category and Status are sortable.
/// Receipt and Actions are not.
pub fn finance_columns() -> Result<ColumnSpec<FinanceEntity>> {
    ColumnSpec::new(vec![
        Column::new(FinanceEntity::SUBMITTER_ID, "Submitter")
            .sortable()
            .render_with(|f: &FinanceEntity| {
                format!("{} ({})", f.submitter_id, f.submitter_type.nice_label())
            }),
        Column::new(FinanceEntity::AMOUNT, "Amount")
            .sortable()
            .render_with(|f: &FinanceEntity| format_amount(f.amount)),
        Column::new(FinanceEntity::DESCRIPTION, "Description").sortable(),
        Column::new(FinanceEntity::CATEGORY, "Category").sortable(),
        Column::new(FinanceEntity::STATUS, "Status")
            .sortable()
            .render_with(|f: &FinanceEntity| f.status.nice_label()),
        Column::new(FinanceEntity::RECEIPT_URL, "Receipt").render_with(|f: &FinanceEntity| {
            match f.receipt_url {
                Some(_) => "View Receipt".to_string(),
                None => NO_RECEIPT.to_string(),
            }
        }),
        Column::new(FinanceEntity::ID, "Actions"),
    ])
}
