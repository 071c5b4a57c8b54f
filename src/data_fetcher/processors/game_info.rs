use scraper::Html;

use crate::data_fetcher::html::{element_text, select_first, select_first_non_empty};
use crate::data_fetcher::models::GameInfo;
use crate::error::AppError;

const DATE_SELECTORS: [&str; 2] = ["div.date", "span.date"];
const TEAM_SELECTORS: [&str; 2] = ["div.team-name", "span.team"];
const SCORE_SELECTORS: [&str; 2] = ["div.score", "span.score"];

/// Reads the game header: date, the two team names and the two scores.
///
/// # Arguments
/// * `document` - Parsed game page
///
/// # Returns
/// * `Ok(GameInfo)` - Fields are filled only when found. Teams and scores
///   need at least two matches of the winning selector; the first is home,
///   the second away.
/// * `Err(AppError::Selector)` - A selector failed to parse
pub fn parse_game_info(document: &Html) -> Result<GameInfo, AppError> {
    let root = document.root_element();
    let mut info = GameInfo {
        date: select_first(root, &DATE_SELECTORS)?.map(element_text),
        ..Default::default()
    };

    let teams = select_first_non_empty(root, &TEAM_SELECTORS)?;
    if let [home, away, ..] = teams.as_slice() {
        info.home_team = Some(element_text(*home));
        info.away_team = Some(element_text(*away));
    }

    let scores = select_first_non_empty(root, &SCORE_SELECTORS)?;
    if let [home, away, ..] = scores.as_slice() {
        info.home_score = Some(element_text(*home));
        info.away_score = Some(element_text(*away));
    }

    Ok(info)
}
