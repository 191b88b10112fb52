//! Plain-text rendering of a view page.
//!
//! ```text
//! Submitter         Amount  Description
//! ----------------  ------  -----------
//! u1 (User)         $12.00  Pizza
//!
//! page 1 of 1 (1 records)
//! ```

use tabview::{ColumnSpec, Record, View};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown instead of rows when the page is empty.
pub const EMPTY_MESSAGE: &str = "No records found.";

const GAP: &str = "  ";

/// Longest cell, in terminal columns, before truncation.
pub const MAX_CELL_WIDTH: usize = 40;

/// Renders `view` as a fixed-width table with a pagination footer.
pub fn render_page<T: Record>(view: &View<'_, T>, columns: &ColumnSpec<T>) -> String {
    let header: Vec<String> = columns.labels().into_iter().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = view
        .rows(columns)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let mut out = render_grid(&header, &rows);
    if rows.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&footer(view));
    out.push('\n');
    out
}

/// `page X of Y (N records)`, with a one-based page number.
pub fn footer<T>(view: &View<'_, T>) -> String {
    format!(
        "page {} of {} ({} records)",
        view.pagination.page_index + 1,
        view.pagination.total_pages,
        view.total_filtered
    )
}

/// Header, dashed rule and rows, each column padded to its widest cell.
fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(GAP);
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.width());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Truncates `s` to `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}
