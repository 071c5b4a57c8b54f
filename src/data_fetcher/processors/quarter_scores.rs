use scraper::Html;

use crate::data_fetcher::html::select_first;
use crate::data_fetcher::models::RawTable;
use crate::data_fetcher::tables::table_rows;
use crate::error::AppError;

const QUARTER_TABLE_SELECTORS: [&str; 2] = ["table.quarter-scores", "div.quarter-breakdown"];

/// Extracts the dedicated quarter-by-quarter score block, if the page marks one.
///
/// Rows follow the generic table rules. The result is not part of the
/// ordered table list, so its `index` is always 0.
pub fn parse_quarter_scores(document: &Html) -> Result<Option<RawTable>, AppError> {
    let Some(element) = select_first(document.root_element(), &QUARTER_TABLE_SELECTORS)? else {
        return Ok(None);
    };

    let rows = table_rows(element);
    Ok((!rows.is_empty()).then(|| RawTable::new(0, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::page;

    #[test]
    fn test_marked_table() {
        let html = page(&[
            "<table><tr><td>other</td></tr></table>".to_string(),
            r#"<table class="quarter-scores">
                <tr><th></th><th>Q1</th><th>Q2</th></tr>
                <tr><td>湖人</td><td>30</td><td>25</td></tr>
            </table>"#
                .to_string(),
        ]);

        let table = parse_quarter_scores(&Html::parse_document(&html))
            .unwrap()
            .unwrap();
        assert_eq!(table.rows[0], vec!["", "Q1", "Q2"]);
        assert_eq!(table.rows[1], vec!["湖人", "30", "25"]);
    }

    #[test]
    fn test_div_breakdown() {
        let html = page(&[r#"<div class="quarter-breakdown"><table>
                <tr><td>勇士</td><td>22</td></tr>
            </table></div>"#
            .to_string()]);

        let table = parse_quarter_scores(&Html::parse_document(&html))
            .unwrap()
            .unwrap();
        assert_eq!(table.rows, vec![vec!["勇士", "22"]]);
    }

    #[test]
    fn test_absent_or_empty() {
        let unmarked = page(&["<table><tr><td>Q1</td></tr></table>".to_string()]);
        assert_eq!(
            parse_quarter_scores(&Html::parse_document(&unmarked)).unwrap(),
            None
        );

        let empty = page(&[r#"<table class="quarter-scores"><tr><td> </td></tr></table>"#.to_string()]);
        assert_eq!(
            parse_quarter_scores(&Html::parse_document(&empty)).unwrap(),
            None
        );
    }
}
