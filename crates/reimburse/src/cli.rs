//! Command-line interface.
//!
//! One invocation builds one view: load the records, apply the flags in the
//! order a user would click through the table (search, filters, sort, page
//! size, page) and print the resulting page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tabview::{Bound, TableView, ViewConfig};
use tracing::{debug, info, warn};

use crate::columns::finance_columns;
use crate::entity::FinanceEntity;
use crate::kinds::{Category, Status, SubmitterType};
use crate::table::render_page;

/// Search, filter, sort and page reimbursement requests.
#[derive(Debug, Parser)]
#[command(name = "reimburse")]
#[command(version)]
#[command(about = "Search, filter, sort and page reimbursement requests")]
pub struct Cli {
    /// JSON file holding an array of finance entities
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Free-text search across every field (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show requests with this status (repeatable)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<Status>,

    /// Only show requests in this category (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Only show requests from this kind of submitter (repeatable)
    #[arg(long = "submitter-type", value_name = "TYPE")]
    pub submitter_types: Vec<SubmitterType>,

    /// Minimum amount, inclusive
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum amount, inclusive
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Click a column header (repeat to flip the direction)
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// View configuration (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let source = fs::read_to_string(&cli.data)
        .with_context(|| format!("failed to read {}", cli.data.display()))?;
    let records = FinanceEntity::list_from_json(&source)
        .with_context(|| format!("failed to parse {}", cli.data.display()))?;
    info!(count = records.len(), "loaded records");

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ViewConfig::default(),
    };

    let mut columns = finance_columns()?;
    if !config.columns.is_empty() {
        columns = columns.select(&config.columns)?;
    }

    let mut table = TableView::with_config(columns, &config)?;
    apply(&mut table, cli)?;

    let view = table.get_view(&records);
    debug!(
        visible = view.visible.len(),
        total = view.total_filtered,
        "built view"
    );

    if cli.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(render_page(&view, table.columns()))
    }
}

/// Applies the command-line selections to `table`.
pub fn apply(table: &mut TableView<FinanceEntity>, cli: &Cli) -> Result<()> {
    if let Some(query) = &cli.search {
        table.set_search_query(query.as_str());
    }

    let selections = cli
        .statuses
        .iter()
        .map(|s| (FinanceEntity::STATUS, s.label()))
        .chain(
            cli.categories
                .iter()
                .map(|c| (FinanceEntity::CATEGORY, c.label())),
        )
        .chain(
            cli.submitter_types
                .iter()
                .map(|t| (FinanceEntity::SUBMITTER_TYPE, t.label())),
        );
    for (field, label) in selections {
        // Flags name a set, so a repeated value must not toggle it back off.
        if !table.filters().is_selected(field, label) {
            table.toggle_filter(field, label);
        }
    }

    // A malformed bound leaves the amount unconstrained on that side. The
    // engine has already logged the warning.
    let bounds = [
        ("--min", Bound::Min, &cli.min),
        ("--max", Bound::Max, &cli.max),
    ];
    for (flag, bound, input) in bounds {
        if let Some(input) = input {
            if table
                .set_bound_input(FinanceEntity::AMOUNT, bound, input)
                .is_err()
            {
                debug!(flag, "amount left unbounded");
            }
        }
    }

    // An unknown or unsortable column keeps the previous sort.
    for column in &cli.sort {
        if let Err(err) = table.sort_by(column) {
            warn!(column = column.as_str(), error = %err, "ignoring sort");
        }
    }

    if let Some(size) = cli.page_size {
        table.set_page_size(size).context("invalid --page-size")?;
    }
    table.set_page(cli.page.saturating_sub(1));

    Ok(())
}

/// Loads a view configuration, choosing the format by extension.
pub fn load_config(path: &Path) -> Result<ViewConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        ViewConfig::from_json_str(&source)
    } else {
        ViewConfig::from_yaml_str(&source)
    };
    config.with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("reimburse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_repeated_filters() {
        let cli = parse(&[
            "--data",
            "x.json",
            "--status",
            "pending",
            "--status",
            "APPROVED",
            "--category",
            "Materials & Supplies",
            "--submitter-type",
            "organizer",
        ]);
        assert_eq!(cli.statuses, vec![Status::Pending, Status::Approved]);
        assert_eq!(cli.categories, vec![Category::MaterialsSupplies]);
        assert_eq!(cli.submitter_types, vec![SubmitterType::Organizer]);
        assert_eq!(cli.page, 1);
    }

    #[test]
    fn rejects_unknown_status() {
        let result =
            Cli::try_parse_from(["reimburse", "--data", "x.json", "--status", "lost"]);
        assert!(result.is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = parse(&["-d", "x.json", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn negative_bounds_are_values() {
        let cli = parse(&["-d", "x.json", "--min", "-5"]);
        assert_eq!(cli.min.as_deref(), Some("-5"));
    }
}
