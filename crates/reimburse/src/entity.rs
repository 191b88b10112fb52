//! The reimbursement request record.

use serde::{Deserialize, Serialize};
use tabview_macros::Record;

use crate::kinds::{Category, Status, SubmitterType};

/// One reimbursement request, as served by the finance API.
///
/// Field names in JSON and in the view are camelCase, e.g. `submitterId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntity {
    #[record(id, String)]
    pub id: String,

    #[record(String, rename = "submitterId")]
    pub submitter_id: String,

    #[record(Label, rename = "submitterType")]
    pub submitter_type: SubmitterType,

    #[record(Number)]
    pub amount: f64,

    #[record(String)]
    pub description: String,

    #[record(Label)]
    pub category: Category,

    #[record(String)]
    pub street: String,

    #[record(String)]
    pub city: String,

    #[record(String)]
    pub state: String,

    #[record(String, rename = "postalCode")]
    pub postal_code: String,

    #[record(Label)]
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[record(String, rename = "receiptUrl")]
    pub receipt_url: Option<String>,

    /// Milliseconds since the Unix epoch.
    #[record(Timestamp, rename = "createdAt")]
    pub created_at: i64,

    #[record(String, rename = "hackathonId")]
    pub hackathon_id: String,

    #[record(String, rename = "updatedBy")]
    pub updated_by: String,
}

impl FinanceEntity {
    /// Parses a JSON array of finance entities.
    pub fn list_from_json(source: &str) -> serde_json::Result<Vec<FinanceEntity>> {
        serde_json::from_str(source)
    }
}
