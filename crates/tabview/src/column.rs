//! Column specifications.
//!
//! A [`ColumnSpec`] is the ordered list of columns a view displays. Each
//! [`Column`] names a record field, carries a header label, says whether the
//! view may sort by it, and may override the comparator or cell rendering.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::ordering::Dir;
use crate::record::Record;

/// Custom comparator: receives both records and the active direction, and its
/// result is used as-is.
pub type SortFn<T> = Arc<dyn Fn(&T, &T, Dir) -> Ordering + Send + Sync>;

/// Custom cell renderer.
pub type RenderFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// One column of a table view.
pub struct Column<T> {
    id: String,
    label: String,
    sortable: bool,
    comparator: Option<SortFn<T>>,
    render: Option<RenderFn<T>>,
}

impl<T> Column<T> {
    /// Creates a non-sortable column for the field `id`.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            id: id.into(),
            label: label.into(),
            sortable: false,
            comparator: None,
            render: None,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sorts this column with a custom comparator. Implies [`Column::sortable`].
    pub fn sort_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T, Dir) -> Ordering + Send + Sync + 'static,
    {
        self.sortable = true;
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Renders cells of this column with `f` instead of the field text.
    pub fn render_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn comparator(&self) -> Option<&SortFn<T>> {
        self.comparator.as_ref()
    }
}

impl<T: Record> Column<T> {
    /// Renders this column's cell for `record`.
    pub fn render_cell(&self, record: &T) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.field_value(&self.id).to_text().into_owned(),
        }
    }
}

// Closures aren't Clone/Debug, so these are written out by hand.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Column {
            id: self.id.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            comparator: self.comparator.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("custom_comparator", &self.comparator.is_some())
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

/// Serializable column definition for configuration files.
///
/// ```
/// use tabview::ColumnDef;
///
/// let def: ColumnDef = serde_json::from_str(r#"{"id": "amount", "label": "Amount", "sortable": true}"#).unwrap();
/// assert!(def.sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub sortable: bool,
}

impl<T> From<&ColumnDef> for Column<T> {
    fn from(def: &ColumnDef) -> Self {
        let column = Column::new(def.id.clone(), def.label.clone());
        if def.sortable {
            column.sortable()
        } else {
            column
        }
    }
}

/// Ordered set of columns with unique ids.
pub struct ColumnSpec<T> {
    columns: Vec<Column<T>>,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        ColumnSpec {
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<T> ColumnSpec<T> {
    /// Builds a specification, rejecting duplicate column ids.
    ///
    /// The error names the first id that appears twice.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ViewError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(ColumnSpec { columns })
    }

    /// Builds a specification from configuration definitions.
    pub fn from_defs(defs: &[ColumnDef]) -> Result<Self> {
        Self::new(defs.iter().map(Column::from).collect())
    }

    /// Rearranges this specification to follow `defs`.
    ///
    /// Each definition picks the column with the same id, keeping its
    /// comparator and renderer, and overrides its label and sortability.
    /// Definitions naming an unknown id become plain columns.
    pub fn select(&self, defs: &[ColumnDef]) -> Result<Self> {
        let columns = defs
            .iter()
            .map(|def| match self.get(&def.id) {
                Some(column) => Column {
                    label: def.label.clone(),
                    sortable: def.sortable,
                    ..column.clone()
                },
                None => Column::from(def),
            })
            .collect();
        Self::new(columns)
    }

    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Looks up a column the view may sort by.
    pub fn sortable_column(&self, id: &str) -> Result<&Column<T>> {
        match self.get(id) {
            Some(column) if column.sortable => Ok(column),
            Some(_) => Err(ViewError::InvalidSortColumn {
                column: id.to_string(),
                reason: "column is not sortable",
            }),
            None => Err(ViewError::InvalidSortColumn {
                column: id.to_string(),
                reason: "no such column",
            }),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T: Record> ColumnSpec<T> {
    /// Renders one row of cells, in column order.
    pub fn render_row(&self, record: &T) -> Vec<String> {
        self.columns.iter().map(|c| c.render_cell(record)).collect()
    }
}
