//! Generic table extraction over the whole document.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::html::{class_matches, element_text};
use super::models::{RawTable, TeamName};
use super::team_names::is_known_team;
use crate::constants::markers::QUARTER_LABELS;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("static selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("static selector"));
static DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("static selector"));
static DATA_DIV_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("stat|score|point|player|team").expect("static regex"));

/// Extracts every `<table>` in document order.
///
/// Rows without any non-blank cell are dropped and tables left without
/// rows are skipped. Surviving tables are numbered consecutively.
pub fn extract_tables(document: &Html) -> Vec<RawTable> {
    let mut tables = Vec::new();
    for (position, element) in document.select(&TABLE_SELECTOR).enumerate() {
        let rows = table_rows(element);
        if rows.is_empty() {
            debug!("Skipping table {position}: no usable rows");
            continue;
        }
        tables.push(RawTable::new(tables.len(), rows));
    }
    tables
}

/// Trimmed `td`/`th` text for each `tr` below `element`.
///
/// A row is kept when at least one of its cells has text; blank cells in
/// a kept row are preserved so ragged layouts survive unchanged.
pub fn table_rows(element: ElementRef<'_>) -> Vec<Vec<String>> {
    element
        .select(&ROW_SELECTOR)
        .map(row_cells)
        .filter(|cells| cells.iter().any(|cell| !cell.is_empty()))
        .collect()
}

/// Trimmed text of every header or data cell in a row
pub fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL_SELECTOR).map(element_text).collect()
}

/// Team names from the quarter-score table: the second column of each row,
/// when it holds a known localized team name rather than a quarter label.
pub fn discover_team_names(table: &RawTable) -> Vec<TeamName> {
    if table.row_count() < 2 {
        return Vec::new();
    }

    table
        .rows
        .iter()
        .filter_map(|row| row.get(1))
        .filter(|name| !name.is_empty() && !QUARTER_LABELS.contains(&name.as_str()))
        .filter(|name| is_known_team(name))
        .map(|name| TeamName::new(name.as_str()))
        .collect()
}

/// Text of stat/score-like `div`s that contain at least one digit,
/// full-width digits included.
pub fn collect_data_snippets(document: &Html) -> Vec<String> {
    document
        .select(&DIV_SELECTOR)
        .filter(|div| class_matches(*div, &DATA_DIV_CLASS))
        .map(element_text)
        .filter(|text| text.chars().any(|c| c.is_numeric()))
        .collect()
}
