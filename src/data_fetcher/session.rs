use scraper::Html;
use tracing::{info, warn};

use super::classifier::{Classification, classify_tables};
use super::models::{GameInfo, PlayerStatRecord, RawTable, TeamName, TeamStatRecord};
use super::processors::{
    parse_game_info, parse_player_stats, parse_quarter_scores, parse_team_stats,
};
use super::tables::{collect_data_snippets, discover_team_names, extract_tables};

/// Everything gathered from one game page.
///
/// Each scrape owns its session, so nothing leaks between pages. A section
/// that fails to parse is logged and left empty; the rest of the page is
/// still processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSession {
    pub game_info: GameInfo,
    /// Quarter table from the dedicated parser
    pub quarter_scores: Option<RawTable>,
    pub player_stats: Vec<PlayerStatRecord>,
    pub team_stats: Vec<TeamStatRecord>,
    /// All tables in document order, indexed consecutively
    pub tables: Vec<RawTable>,
    /// Teams discovered from the first table
    pub team_names: Vec<TeamName>,
    pub data_snippets: Vec<String>,
}

impl ScrapeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the page text and runs every extractor over it.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut session = Self::new();
        session.parse_document(&document);
        session
    }

    /// Runs the section parsers, then the generic table extractor.
    pub fn parse_document(&mut self, document: &Html) {
        match parse_game_info(document) {
            Ok(info) => self.game_info = info,
            Err(e) => warn!("Error parsing game info: {e}"),
        }

        match parse_quarter_scores(document) {
            Ok(table) => self.quarter_scores = table,
            Err(e) => warn!("Error parsing quarter scores: {e}"),
        }

        match parse_player_stats(document, &mut self.player_stats) {
            Ok(count) => info!("Found {count} player statistics"),
            Err(e) => warn!("Error parsing player stats: {e}"),
        }

        match parse_team_stats(document, &mut self.team_stats) {
            Ok(count) => info!("Found {count} team statistics"),
            Err(e) => warn!("Error parsing team stats: {e}"),
        }

        self.tables = extract_tables(document);
        info!("Found {} tables", self.tables.len());

        // First retained table, so a blank layout table ahead of the scores is skipped
        if self.team_names.is_empty()
            && let Some(first) = self.tables.first()
        {
            self.team_names = discover_team_names(first);
            if !self.team_names.is_empty() {
                let names: Vec<String> = self.team_names.iter().map(TeamName::display_name).collect();
                info!("Found team names: {}", names.join(", "));
            }
        }

        self.data_snippets = collect_data_snippets(document);
    }

    /// Classifies the extracted tables against the discovered teams.
    pub fn classify(&self) -> Classification<'_> {
        classify_tables(&self.tables, &self.team_names)
    }

    /// Localized names of the first two teams, if both were found
    pub fn team_pair(&self) -> Option<(&str, &str)> {
        match self.team_names.as_slice() {
            [first, second, ..] => Some((&first.localized, &second.localized)),
            _ => None,
        }
    }
}
