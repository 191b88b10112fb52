//! The table view engine.
//!
//! [`TableView`] owns the interactive state of one rendered table: search
//! text, filters, sort and page. Callers mutate that state in response to
//! user actions and pull a [`View`] whenever they need to render:
//!
//! ```text
//! records ─▶ filters ─▶ search ─▶ sort ─▶ paginate ─▶ View
//! ```
//!
//! Filtering runs first so search and the comparator see as few records as
//! possible; pagination runs last because it depends on the final count.
//!
//! The engine is synchronous and single-writer. Share it across threads only
//! behind a lock.

use serde::Serialize;
use tracing::{debug, warn};

use crate::column::ColumnSpec;
use crate::config::ViewConfig;
use crate::error::Result;
use crate::filter::{Bound, FilterState};
use crate::ordering::{sort_records, Dir, SortState};
use crate::page::{paginate, PageSizePolicy, PageSizes, Pagination, DEFAULT_PAGE_SIZE};
use crate::record::Record;
use crate::search::SearchQuery;

/// Interactive state of a table over records of type `T`.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use tabview::{Column, ColumnSpec, Dir, Number, Record, TableView, Value};
///
/// struct Expense {
///     id: u32,
///     amount: u32,
/// }
///
/// impl Record for Expense {
///     const FIELDS: &'static [&'static str] = &["amount"];
///
///     fn record_id(&self) -> Cow<'_, str> {
///         Cow::Owned(self.id.to_string())
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "amount" => Value::Number(Number::from(self.amount)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let expenses: Vec<Expense> = (1..=25).map(|n| Expense { id: n, amount: n }).collect();
/// let columns = ColumnSpec::new(vec![Column::new("amount", "Amount").sortable()]).unwrap();
///
/// let mut view = TableView::new(columns);
/// view.set_bound_input("amount", tabview::Bound::Min, "15").unwrap();
/// view.sort_by("amount").unwrap();
///
/// let page = view.get_view(&expenses);
/// assert_eq!(page.total_filtered, 11);
/// assert_eq!(page.visible.first().map(|e| e.amount), Some(15));
/// assert_eq!(page.active_sort.map(|s| s.dir), Some(Dir::Asc));
/// ```
#[derive(Debug, Clone)]
pub struct TableView<T> {
    columns: ColumnSpec<T>,
    page_sizes: PageSizes,
    page_size_policy: PageSizePolicy,
    filters: FilterState,
    search: SearchQuery,
    sort: Option<SortState>,
    page_index: usize,
    page_size: usize,
}

impl<T: Record> TableView<T> {
    /// Creates a view with the default page sizes (5/10/25/50, starting at 10).
    pub fn new(columns: ColumnSpec<T>) -> Self {
        TableView {
            columns,
            page_sizes: PageSizes::default(),
            page_size_policy: PageSizePolicy::default(),
            filters: FilterState::new(),
            search: SearchQuery::default(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates a view using the page sizing rules of `config`.
    pub fn with_config(columns: ColumnSpec<T>, config: &ViewConfig) -> Result<Self> {
        config.validate()?;
        let mut view = TableView::new(columns);
        view.page_sizes = config.page_sizes()?;
        view.page_size_policy = config.page_size_policy;
        view.page_size = config.default_page_size;
        Ok(view)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = SearchQuery::new(query);
    }

    /// Toggles a categorical filter value. Returns `true` if now selected.
    pub fn toggle_filter(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.filters.toggle(field, value)
    }

    pub fn set_bound(&mut self, field: &str, bound: Bound, value: Option<f64>) {
        self.filters.set_bound(field, bound, value);
    }

    /// Sets a numeric bound from user input; see [`FilterState::set_bound_input`].
    pub fn set_bound_input(&mut self, field: &str, bound: Bound, input: &str) -> Result<()> {
        let result = self.filters.set_bound_input(field, bound, input);
        if let Err(err) = &result {
            warn!(field, error = %err, "cleared malformed bound");
        }
        result
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the active column flips the direction; any other sortable
    /// column becomes active in ascending order. Unknown or non-sortable
    /// columns are refused and the current sort is kept.
    pub fn sort_by(&mut self, column: &str) -> Result<()> {
        if let Err(err) = self.columns.sortable_column(column) {
            debug!(column, error = %err, "ignoring sort request");
            return Err(err);
        }

        self.sort = Some(match self.sort.take() {
            Some(current) if current.column == column => SortState {
                dir: current.dir.flip(),
                ..current
            },
            _ => SortState::new(column, Dir::Asc),
        });
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Requests a page. Out-of-range pages are clamped by the next
    /// [`get_view`](Self::get_view).
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Changes the page size and returns to the first page.
    ///
    /// Sizes outside the allowed set are clamped to the nearest allowed size,
    /// or refused under [`PageSizePolicy::Reject`] (state unchanged). Returns
    /// the size in effect.
    pub fn set_page_size(&mut self, requested: usize) -> Result<usize> {
        let size = match self.page_sizes.resolve(requested, self.page_size_policy) {
            Ok(size) => size,
            Err(err) => {
                debug!(requested, error = %err, "ignoring page size");
                return Err(err);
            }
        };
        if size != requested {
            debug!(requested, size, "page size clamped");
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(size)
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// Builds the visible page for `records` from the current state.
    ///
    /// A page index past the end of the filtered records is clamped to the
    /// last page, and the clamped index is kept.
    pub fn get_view<'a>(&mut self, records: &'a [T]) -> View<'a, T> {
        let mut items: Vec<&'a T> = records
            .iter()
            .filter(|record| self.filters.evaluate(*record))
            .filter(|record| self.search.matches(*record))
            .collect();

        if let Some(sort) = &self.sort {
            if let Some(column) = self.columns.get(&sort.column) {
                sort_records(&mut items, column, sort.dir);
            }
        }

        let total_filtered = items.len();
        let page = paginate(items, self.page_index, self.page_size);
        if page.pagination.page_index != self.page_index {
            debug!(
                requested = self.page_index,
                page = page.pagination.page_index,
                "page index clamped"
            );
            self.page_index = page.pagination.page_index;
        }

        View {
            visible: page.items,
            total_filtered,
            pagination: page.pagination,
            active_sort: self.sort.clone(),
            active_filters: self.filters.clone(),
            search: self.search.as_str().to_string(),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn columns(&self) -> &ColumnSpec<T> {
        &self.columns
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn search_query(&self) -> &str {
        self.search.as_str()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// The current page index, clamped by the last [`get_view`](Self::get_view).
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_sizes(&self) -> &PageSizes {
        &self.page_sizes
    }
}

/// Render-ready output of [`TableView::get_view`].
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct View<'a, T> {
    /// Records on the current page, in display order.
    pub visible: Vec<&'a T>,
    /// Records left after filters and search, across all pages.
    pub total_filtered: usize,
    pub pagination: Pagination,
    pub active_sort: Option<SortState>,
    pub active_filters: FilterState,
    pub search: String,
}

impl<T> View<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl<T: Record> View<'_, T> {
    /// Renders the visible records as rows of cell text, in column order.
    pub fn rows(&self, columns: &ColumnSpec<T>) -> Vec<Vec<String>> {
        self.visible
            .iter()
            .map(|record| columns.render_row(*record))
            .collect()
    }
}
