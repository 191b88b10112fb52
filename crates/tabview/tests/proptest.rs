//! Property-based tests for the table view engine using proptest.

use std::borrow::Cow;

use proptest::prelude::*;
use tabview::{
    paginate, Bound, Column, ColumnSpec, Dir, FilterState, Number, Record, SearchQuery,
    TableView, Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Row {
    id: usize,
    name: String,
    status: String,
    amount: i64,
}

impl Record for Row {
    const FIELDS: &'static [&'static str] = &["name", "status", "amount"];

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "status" => Value::String(&self.status),
            "amount" => Value::Number(Number::I64(self.amount)),
            _ => Value::None,
        }
    }
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[a-zA-Z ]{0,8}",
            prop::sample::select(vec!["PENDING", "APPROVED", "REJECTED"]),
            -100i64..100,
        ),
        0..60,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (name, status, amount))| Row {
                id,
                name,
                status: status.to_string(),
                amount,
            })
            .collect()
    })
}

fn columns() -> ColumnSpec<Row> {
    ColumnSpec::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("status", "Status").sortable(),
        Column::new("amount", "Amount").sortable(),
    ])
    .unwrap()
}

fn ids(rows: &[&Row]) -> Vec<usize> {
    rows.iter().map(|r| r.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Searching twice with the same query gives the same result.
    #[test]
    fn search_is_idempotent(rows in rows_strategy(), query in "[a-zA-Z]{0,3}") {
        let search = SearchQuery::new(query.as_str());
        let once: Vec<&Row> = rows.iter().filter(|r| search.matches(*r)).collect();
        let twice: Vec<&Row> = once.iter().copied().filter(|r| search.matches(*r)).collect();
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// Search ignores case in both the query and the data.
    #[test]
    fn search_is_case_insensitive(rows in rows_strategy(), query in "[a-zA-Z]{0,3}") {
        let lower = SearchQuery::new(query.to_lowercase());
        let upper = SearchQuery::new(query.to_uppercase());
        for row in &rows {
            prop_assert_eq!(lower.matches(row), upper.matches(row));
        }
    }

    /// Adding a filter constraint never grows the result.
    #[test]
    fn filters_are_monotonic(
        rows in rows_strategy(),
        min in -100i64..100,
        max in -100i64..100,
    ) {
        let mut state = FilterState::new();
        state.toggle("status", "PENDING");
        state.toggle("status", "APPROVED");
        let broad = rows.iter().filter(|r| state.evaluate(*r)).count();

        state.set_bound("amount", Bound::Min, Some(min as f64));
        let narrower = rows.iter().filter(|r| state.evaluate(*r)).count();
        prop_assert!(narrower <= broad);

        state.set_bound("amount", Bound::Max, Some(max as f64));
        let narrowest = rows.iter().filter(|r| state.evaluate(*r)).count();
        prop_assert!(narrowest <= narrower);
    }

    /// Resetting filters restores the full record list.
    #[test]
    fn reset_restores_all(rows in rows_strategy(), min in -100i64..100) {
        let mut table = TableView::new(columns());
        table.toggle_filter("status", "REJECTED");
        table.set_bound("amount", Bound::Min, Some(min as f64));
        table.reset_filters();

        let view = table.get_view(&rows);
        prop_assert_eq!(view.total_filtered, rows.len());
        prop_assert!(view.active_filters.is_empty());
    }

    /// Equal sort keys keep their input order, in either direction.
    #[test]
    fn sort_is_stable(rows in rows_strategy(), desc in any::<bool>()) {
        let mut table = TableView::new(columns());
        table.sort_by("status").unwrap();
        if desc {
            table.sort_by("status").unwrap();
        }
        table.set_page_size(50).unwrap();

        let all: Vec<Row> = rows.into_iter().take(50).collect();
        let view = table.get_view(&all);

        for pair in view.visible.windows(2) {
            if pair[0].status == pair[1].status {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Numeric sort produces ascending amounts and a permutation of the input.
    #[test]
    fn numeric_sort_orders_amounts(rows in rows_strategy()) {
        let mut table = TableView::new(columns());
        table.sort_by("amount").unwrap();
        table.set_page_size(50).unwrap();

        let all: Vec<Row> = rows.into_iter().take(50).collect();
        let view = table.get_view(&all);

        prop_assert_eq!(view.visible.len(), all.len());
        for pair in view.visible.windows(2) {
            prop_assert!(pair[0].amount <= pair[1].amount);
        }
        prop_assert_eq!(view.active_sort.map(|s| s.dir), Some(Dir::Asc));
    }

    /// Walking every page visits each item exactly once.
    #[test]
    fn pages_cover_items(len in 0usize..200, size in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let first = paginate(items.clone(), 0, size);
        let mut seen = Vec::new();
        for index in 0..first.pagination.total_pages {
            let page = paginate(items.clone(), index, size);
            prop_assert!(page.items.len() <= size);
            seen.extend(page.items);
        }
        prop_assert_eq!(seen, items);
    }

    /// The reported page index is always in range.
    #[test]
    fn page_index_in_range(len in 0usize..200, index in 0usize..50, size in 1usize..30) {
        let page = paginate((0..len).collect::<Vec<_>>(), index, size);
        prop_assert!(page.pagination.page_index < page.pagination.total_pages);
        prop_assert!(page.pagination.total_pages >= 1);
        prop_assert_eq!(page.pagination.total_items, len);
    }
}
