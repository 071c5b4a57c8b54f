//! Records produced by one scrape of a game page.

use indexmap::IndexMap;

use super::team_names::normalize;

/// One extracted table: rows of trimmed cell text, in document order.
///
/// Rows may differ in width. `index` is the table's position among the
/// tables that survived extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub index: usize,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(index: usize, rows: Vec<Vec<String>>) -> Self {
        Self { index, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell counts per row, e.g. `[1, 3, 3]` for a season-stat triple
    pub fn row_widths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// True if any cell of any row contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.contains(needle))
    }
}

/// Sparse game header. Any field may be missing when the page lacks the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub date: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
}

impl GameInfo {
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Present fields as `(column, value)` pairs in a fixed column order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("date", &self.date),
            ("home_team", &self.home_team),
            ("away_team", &self.away_team),
            ("home_score", &self.home_score),
            ("away_score", &self.away_score),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }
}

/// One boxscore row keyed by the header text found in its table.
/// The key set is whatever the page used, so this is a map rather than a struct.
pub type PlayerStatRecord = IndexMap<String, String>;

/// One head-to-head statistic from the team comparison block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStatRecord {
    pub statistic: String,
    pub home_team: String,
    pub away_team: String,
}

/// A team as named on the page plus its canonical short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamName {
    pub localized: String,
    pub canonical: String,
}

impl TeamName {
    pub fn new(localized: impl Into<String>) -> Self {
        let localized = localized.into();
        let canonical = normalize(&localized);
        Self {
            localized,
            canonical,
        }
    }

    /// `localized(canonical)`, e.g. `湖人(Lakers)`
    pub fn display_name(&self) -> String {
        format!("{}({})", self.localized, self.canonical)
    }
}

/// One side of a season-stat comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSeasonStatEntry {
    /// Display name, `localized(canonical)`
    pub team: String,
    /// Translated category label, e.g. `Points per Game`
    pub statistic: String,
    pub value: String,
    pub league_rank: String,
}

/// Category a raw table was sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableClass {
    PlayerRoster,
    TeamSeasonTriple,
    QuarterScores,
    Unclassified,
}

/// A raw table with its category and the sheet slot it is written to.
///
/// Season-stat triples have no slot of their own: they only feed the
/// consolidated season statistics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTable<'a> {
    pub class: TableClass,
    pub table: &'a RawTable,
    pub slot_name: Option<String>,
}
