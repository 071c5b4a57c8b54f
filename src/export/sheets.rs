//! The ordered list of sheets a scrape turns into.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::constants::sheets::{
    GAME_INFO, MAX_SHEET_NAME_LENGTH, PLAYER_STATS, QUARTER_SCORES, TEAM_SEASON_STATISTICS,
    TEAM_STATS,
};
use crate::data_fetcher::classifier::pivot_season_stats;
use crate::data_fetcher::models::{GameInfo, PlayerStatRecord, TeamStatRecord};
use crate::data_fetcher::session::ScrapeSession;

/// Characters Excel does not allow in a sheet name
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// One worksheet: an optional bold header row followed by plain rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    pub fn with_header(name: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header: Some(header),
            rows,
        }
    }

    /// A raw grid written as-is, without a header row
    pub fn raw(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header: None,
            rows,
        }
    }

    /// Rows written to the sheet, header included
    pub fn row_count(&self) -> usize {
        self.rows.len() + usize::from(self.header.is_some())
    }

    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

/// Builds every sheet with content, in write order:
/// game info, player stats, team stats, classified table slots, the
/// fallback quarter table, season statistics.
///
/// Names are made valid and unique before returning.
pub fn build_sheet_plan(session: &ScrapeSession) -> Vec<SheetData> {
    let mut plan = Vec::new();

    plan.extend(game_info_sheet(&session.game_info));
    plan.extend(player_stats_sheet(&session.player_stats));
    plan.extend(team_stats_sheet(&session.team_stats));

    let classification = session.classify();
    for (slot_name, table) in classification.slots() {
        plan.push(SheetData::raw(slot_name, table.rows.clone()));
    }

    if !classification.has_quarter_scores()
        && let Some(quarters) = &session.quarter_scores
    {
        plan.push(SheetData::raw(QUARTER_SCORES, quarters.rows.clone()));
    }

    if let Some(season) = pivot_season_stats(&classification.season_entries) {
        plan.push(SheetData::with_header(
            TEAM_SEASON_STATISTICS,
            season.header,
            season.rows,
        ));
    }

    let mut names = SheetNames::default();
    for sheet in &mut plan {
        sheet.name = names.assign(&sheet.name);
    }
    plan
}

fn game_info_sheet(info: &GameInfo) -> Option<SheetData> {
    let fields = info.fields();
    if fields.is_empty() {
        return None;
    }

    let header = fields.iter().map(|(column, _)| column.to_string()).collect();
    let values = fields.iter().map(|(_, value)| value.to_string()).collect();
    Some(SheetData::with_header(GAME_INFO, header, vec![values]))
}

fn player_stats_sheet(records: &[PlayerStatRecord]) -> Option<SheetData> {
    if records.is_empty() {
        return None;
    }

    let columns: IndexSet<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(*column).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let header = columns.iter().map(|c| c.to_string()).collect();
    Some(SheetData::with_header(PLAYER_STATS, header, rows))
}

fn team_stats_sheet(records: &[TeamStatRecord]) -> Option<SheetData> {
    if records.is_empty() {
        return None;
    }

    let header = ["statistic", "home_team", "away_team"]
        .map(String::from)
        .to_vec();
    let rows = records
        .iter()
        .map(|r| vec![r.statistic.clone(), r.home_team.clone(), r.away_team.clone()])
        .collect();
    Some(SheetData::with_header(TEAM_STATS, header, rows))
}

/// Replaces characters Excel rejects, drops leading and trailing
/// apostrophes and caps the length.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if INVALID_SHEET_NAME_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME_LENGTH)
        .collect();

    let trimmed = cleaned.trim_matches('\'');
    if trimmed.is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out sheet names that are valid and unique within one workbook.
///
/// Excel compares sheet names case-insensitively. A taken name gets a
/// ` (2)`, ` (3)`, ... suffix, cutting the base so the result still fits.
#[derive(Debug, Default)]
pub struct SheetNames {
    used: HashSet<String>,
}

impl SheetNames {
    pub fn assign(&mut self, name: &str) -> String {
        let base = sanitize_sheet_name(name);
        let mut candidate = base.clone();
        let mut counter = 2;

        while self.used.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({counter})");
            let keep = MAX_SHEET_NAME_LENGTH.saturating_sub(suffix.chars().count());
            candidate = base.chars().take(keep).collect::<String>() + &suffix;
            counter += 1;
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::RawTable;
    use crate::testing_utils::sample_game_page;

    fn names(plan: &[SheetData]) -> Vec<&str> {
        plan.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sample_page_plan_order() {
        let session = ScrapeSession::from_html(&sample_game_page());
        let plan = build_sheet_plan(&session);

        assert_eq!(
            names(&plan),
            vec![
                "Game Info",
                "Player Stats",
                "Team Stats",
                "Quarter Scores",
                "塞爾蒂克(Celtics)_Players",
                "湖人(Lakers)_Players",
                "Table_7",
                "Team Season Statistics",
            ]
        );
    }

    #[test]
    fn test_game_info_sheet_lists_present_fields() {
        let session = ScrapeSession {
            game_info: GameInfo {
                date: Some("2024/01/15".into()),
                away_team: Some("湖人".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let plan = build_sheet_plan(&session);
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan[0].header.as_deref(),
            Some(&["date".to_string(), "away_team".to_string()][..])
        );
        assert_eq!(plan[0].rows, vec![vec!["2024/01/15", "湖人"]]);
    }

    #[test]
    fn test_player_stats_header_is_union_of_keys() {
        let session = ScrapeSession {
            player_stats: vec![
                PlayerStatRecord::from([("球員".into(), "Tatum".into()), ("PTS".into(), "30".into())]),
                PlayerStatRecord::from([("球員".into(), "James".into()), ("MIN".into(), "35".into())]),
            ],
            ..Default::default()
        };

        let plan = build_sheet_plan(&session);
        let sheet = &plan[0];
        assert_eq!(sheet.name, "Player Stats");
        assert_eq!(
            sheet.header.clone().unwrap(),
            vec!["球員", "PTS", "MIN"]
        );
        assert_eq!(
            sheet.rows,
            vec![vec!["Tatum", "30", ""], vec!["James", "", "35"]]
        );
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.column_count(), 3);
    }

    #[test]
    fn test_dedicated_quarter_table_is_a_fallback() {
        let session = ScrapeSession {
            quarter_scores: Some(RawTable::new(0, vec![vec!["湖人".into(), "30".into()]])),
            tables: vec![RawTable::new(
                0,
                vec![
                    vec!["犯規".into()],
                    vec!["a".into(), "1".into(), "2".into()],
                    vec!["b".into(), "3".into(), "4".into()],
                ],
            )],
            ..Default::default()
        };

        let plan = build_sheet_plan(&session);
        assert_eq!(names(&plan), vec!["Quarter Scores"]);
        assert_eq!(plan[0].rows, vec![vec!["湖人", "30"]]);
        assert_eq!(plan[0].header, None);
    }

    #[test]
    fn test_empty_session_has_no_sheets() {
        assert!(build_sheet_plan(&ScrapeSession::new()).is_empty());
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Q1/Q2 [home]"), "Q1_Q2 _home_");
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name(""), "Sheet");
        assert_eq!(
            sanitize_sheet_name(&"籃".repeat(40)).chars().count(),
            MAX_SHEET_NAME_LENGTH
        );
    }

    #[test]
    fn test_duplicate_names_get_suffixes_within_the_cap() {
        let mut sheet_names = SheetNames::default();
        let long = "x".repeat(31);

        assert_eq!(sheet_names.assign("Table_2"), "Table_2");
        assert_eq!(sheet_names.assign("table_2"), "table_2 (2)");
        assert_eq!(sheet_names.assign("Table_2"), "Table_2 (3)");
        assert_eq!(sheet_names.assign(&long), long);

        let second = sheet_names.assign(&long);
        assert_eq!(second.chars().count(), MAX_SHEET_NAME_LENGTH);
        assert!(second.ends_with(" (2)"));
    }
}
