use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::data_fetcher::html::{
    class_matches, descendant_elements, element_text, find_descendant_by_class, select_first,
};
use crate::data_fetcher::models::TeamStatRecord;
use crate::error::AppError;

const CONTAINER_SELECTORS: [&str; 2] = ["div.team-stats", "table.team-comparison"];

static STAT_ITEM_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("stat").expect("static regex"));
static STAT_NAME_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("stat-name|category").expect("static regex"));
static HOME_VALUE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("home|team1").expect("static regex"));
static AWAY_VALUE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("away|team2").expect("static regex"));

/// Appends the head-to-head statistics from the team comparison block.
///
/// Items are the `div`/`tr` descendants of the block whose class mentions
/// `stat`. An item without a name element is skipped; a missing home or
/// away value becomes an empty string.
pub fn parse_team_stats(
    document: &Html,
    records: &mut Vec<TeamStatRecord>,
) -> Result<usize, AppError> {
    let Some(container) = select_first(document.root_element(), &CONTAINER_SELECTORS)? else {
        return Ok(0);
    };

    let before = records.len();
    let items = descendant_elements(container).filter(|el| {
        matches!(el.value().name(), "div" | "tr") && class_matches(*el, &STAT_ITEM_CLASS)
    });

    for item in items {
        let Some(name) = find_descendant_by_class(item, &STAT_NAME_CLASS) else {
            continue;
        };

        records.push(TeamStatRecord {
            statistic: element_text(name),
            home_team: descendant_text(item, &HOME_VALUE_CLASS),
            away_team: descendant_text(item, &AWAY_VALUE_CLASS),
        });
    }

    Ok(records.len() - before)
}

fn descendant_text(item: ElementRef<'_>, pattern: &Regex) -> String {
    find_descendant_by_class(item, pattern)
        .map(element_text)
        .unwrap_or_default()
}
