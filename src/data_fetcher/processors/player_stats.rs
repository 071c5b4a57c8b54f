use scraper::Html;

use crate::constants::markers::PLAYER_STAT_HEADERS;
use crate::data_fetcher::html::{element_text, parse_selector};
use crate::data_fetcher::models::PlayerStatRecord;
use crate::data_fetcher::tables::row_cells;
use crate::error::AppError;

/// Appends one record per boxscore row found in the document.
///
/// A table qualifies when one of its `th` cells mentions a minutes or
/// points marker. The cells of its first row become the keys; every later
/// row is zipped against them positionally. Extra cells are dropped,
/// missing cells leave the key out, and rows without cells are skipped.
///
/// # Arguments
/// * `document` - Parsed game page
/// * `records` - Running list shared by every qualifying table, in document order
///
/// # Returns
/// * `Ok(usize)` - Number of records appended by this call
pub fn parse_player_stats(
    document: &Html,
    records: &mut Vec<PlayerStatRecord>,
) -> Result<usize, AppError> {
    let table_selector = parse_selector("table")?;
    let row_selector = parse_selector("tr")?;
    let header_selector = parse_selector("th")?;
    let before = records.len();

    for table in document.select(&table_selector) {
        let is_stat_table = table
            .select(&header_selector)
            .map(element_text)
            .any(|h| PLAYER_STAT_HEADERS.iter().any(|marker| h.contains(marker)));
        if !is_stat_table {
            continue;
        }

        let mut rows = table.select(&row_selector);
        let Some(header_row) = rows.next() else {
            continue;
        };
        let headers = row_cells(header_row);

        for row in rows {
            let record: PlayerStatRecord = headers
                .iter()
                .cloned()
                .zip(row_cells(row))
                .collect();
            if !record.is_empty() {
                records.push(record);
            }
        }
    }

    Ok(records.len() - before)
}
