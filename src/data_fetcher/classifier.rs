//! Sorts extracted tables into categories and reshapes the season-stat
//! comparison tables into one wide table.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::models::{ClassifiedTable, RawTable, TableClass, TeamName, TeamSeasonStatEntry};
use super::team_names::normalize;
use crate::constants::markers::ROSTER;
use crate::constants::sheets::{MAX_SHEET_NAME_LENGTH, PLAYERS_SUFFIX, QUARTER_SCORES};

/// Localized category labels of the season comparison tables and their
/// display form.
const STAT_CATEGORY_LABELS: &[(&str, &str)] = &[
    ("得分", "Points per Game"),
    ("助攻", "Assists per Game"),
    ("籃板", "Rebounds per Game"),
    ("阻攻", "Blocks per Game"),
    ("抄截", "Steals per Game"),
    ("投籃%", "Field Goal %"),
    ("3分%", "3-Point %"),
    ("罰球%", "Free Throw %"),
    ("失誤", "Turnovers per Game"),
];

/// Row widths of a season-stat triple: the category, then one row per team
const TRIPLE_SHAPE: [usize; 3] = [1, 3, 3];

/// Result of one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Every input table with its category, in table order
    pub tables: Vec<ClassifiedTable<'a>>,
    /// Entries from every recognized season-stat triple, in table order
    pub season_entries: Vec<TeamSeasonStatEntry>,
}

impl Classification<'_> {
    /// Tables that get a sheet of their own, with their slot names
    pub fn slots(&self) -> impl Iterator<Item = (&str, &RawTable)> {
        self.tables
            .iter()
            .filter_map(|t| t.slot_name.as_deref().map(|name| (name, t.table)))
    }

    pub fn has_quarter_scores(&self) -> bool {
        self.tables
            .iter()
            .any(|t| t.class == TableClass::QuarterScores)
    }
}

/// Display label for a localized statistic category
pub fn stat_category_label(category: &str) -> Option<&'static str> {
    STAT_CATEGORY_LABELS
        .iter()
        .find(|(localized, _)| *localized == category)
        .map(|(_, label)| *label)
}

/// Cuts a slot name to the sheet-name limit, counting characters.
pub fn truncate_slot_name(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME_LENGTH).collect()
}

/// Classifies every table in order.
///
/// Rules, first match wins:
/// 1. not the first table and some cell holds a roster marker: the next
///    discovered team's players, or `Table_{n}` once the teams run out
/// 2. shape `[1, 3, 3]`: season-stat triple, no slot of its own
/// 3. the first table: quarter scores
/// 4. anything else: `Table_{n}`
///
/// # Arguments
/// * `tables` - Extracted tables, indexed consecutively
/// * `team_names` - Teams discovered from the first table, in order
pub fn classify_tables<'a>(tables: &'a [RawTable], team_names: &[TeamName]) -> Classification<'a> {
    let mut classification = Classification::default();
    let mut roster_count = 0;

    for table in tables {
        let (class, slot_name) = if is_roster_table(table) {
            let slot = match team_names.get(roster_count) {
                Some(team) => {
                    roster_count += 1;
                    format!("{}{}", team.display_name(), PLAYERS_SUFFIX)
                }
                None => fallback_slot_name(table),
            };
            (TableClass::PlayerRoster, Some(slot))
        } else if is_season_triple(table) {
            if let Some(entries) = season_entries_from_triple(table) {
                classification.season_entries.extend(entries);
            }
            (TableClass::TeamSeasonTriple, None)
        } else if table.index == 0 {
            (TableClass::QuarterScores, Some(QUARTER_SCORES.to_string()))
        } else {
            (TableClass::Unclassified, Some(fallback_slot_name(table)))
        };

        classification.tables.push(ClassifiedTable {
            class,
            table,
            slot_name: slot_name.as_deref().map(truncate_slot_name),
        });
    }

    classification
}

fn fallback_slot_name(table: &RawTable) -> String {
    format!("Table_{}", table.index + 1)
}

/// A table after the first one that mentions a starter or position column
pub fn is_roster_table(table: &RawTable) -> bool {
    table.index > 0 && ROSTER.iter().any(|marker| table.contains_text(marker))
}

pub fn is_season_triple(table: &RawTable) -> bool {
    table.row_widths() == TRIPLE_SHAPE
}

/// Unpacks a `[1, 3, 3]` table into one entry per team row.
///
/// Returns `None` when the shape is wrong or the category label is not
/// recognized.
pub fn season_entries_from_triple(table: &RawTable) -> Option<Vec<TeamSeasonStatEntry>> {
    if !is_season_triple(table) {
        return None;
    }

    let category = table.rows[0][0].as_str();
    let Some(label) = stat_category_label(category) else {
        debug!(
            "Dropping season-stat table {}: unknown category '{}'",
            table.index, category
        );
        return None;
    };

    let entries = table.rows[1..]
        .iter()
        .map(|row| TeamSeasonStatEntry {
            team: format!("{}({})", row[0], normalize(&row[0])),
            statistic: label.to_string(),
            value: row[1].clone(),
            league_rank: row[2].clone(),
        })
        .collect();
    Some(entries)
}

/// Wide table with one row per statistic and a value and rank column per team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonStatsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Pivots season entries into statistic rows and per-team value/rank columns.
///
/// Statistics and teams are ordered lexicographically. For a repeated
/// (statistic, team) pair the first entry wins; a pair with no entry is
/// left blank. Returns `None` for no entries.
pub fn pivot_season_stats(entries: &[TeamSeasonStatEntry]) -> Option<SeasonStatsTable> {
    if entries.is_empty() {
        return None;
    }

    let mut grid: BTreeMap<&str, BTreeMap<&str, (&str, &str)>> = BTreeMap::new();
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    for entry in entries {
        teams.insert(entry.team.as_str());
        grid.entry(entry.statistic.as_str())
            .or_default()
            .entry(entry.team.as_str())
            .or_insert((entry.value.as_str(), entry.league_rank.as_str()));
    }

    let mut header = vec!["Statistic".to_string()];
    for team in &teams {
        header.push(format!("{team} Value"));
        header.push(format!("{team} Rank"));
    }

    let rows = grid
        .iter()
        .map(|(statistic, by_team)| {
            let mut row = vec![statistic.to_string()];
            for team in &teams {
                let (value, rank) = by_team.get(team).copied().unwrap_or(("", ""));
                row.push(value.to_string());
                row.push(rank.to_string());
            }
            row
        })
        .collect();

    Some(SeasonStatsTable { header, rows })
}
