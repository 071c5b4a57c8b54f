use nba_game_scraper::{
    data_fetcher::classifier::{classify_tables, pivot_season_stats},
    data_fetcher::models::{RawTable, TableClass, TeamName, TeamSeasonStatEntry},
    data_fetcher::tables::extract_tables,
    data_fetcher::team_names::normalize,
    export::build_sheet_plan,
    testing_utils::{header_table, page, sample_game_page, table},
    ScrapeSession,
};
use scraper::Html;

fn extract(html: &str) -> Vec<RawTable> {
    extract_tables(&Html::parse_document(html))
}

/// Test the points-per-game comparison between Celtics and Lakers
#[test]
fn test_points_triple_scenario() {
    let tables = extract(&page(&[
        table(&[&["quarters"]]),
        table(&[&["得分"], &["塞爾蒂克", "28.4", "3"], &["湖人", "26.1", "9"]]),
    ]));

    let classification = classify_tables(&tables, &[]);

    assert_eq!(
        classification.season_entries,
        vec![
            TeamSeasonStatEntry {
                team: "塞爾蒂克(Celtics)".to_string(),
                statistic: "Points per Game".to_string(),
                value: "28.4".to_string(),
                league_rank: "3".to_string(),
            },
            TeamSeasonStatEntry {
                team: "湖人(Lakers)".to_string(),
                statistic: "Points per Game".to_string(),
                value: "26.1".to_string(),
                league_rank: "9".to_string(),
            },
        ]
    );
}

/// Test that a boxscore table with one data row yields one record
#[test]
fn test_single_player_row_scenario() {
    let session = ScrapeSession::from_html(&page(&[header_table(
        &["球員", "MIN", "PTS"],
        &[&["Jayson Tatum", "36:12", "30"]],
    )]));

    assert_eq!(session.player_stats.len(), 1);
    let record = &session.player_stats[0];
    let pairs: Vec<(&str, &str)> = record
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("球員", "Jayson Tatum"), ("MIN", "36:12"), ("PTS", "30")]
    );
}

/// Test that blank rows never reach classification and blank tables vanish
#[test]
fn test_row_counts_match_non_blank_rows() {
    let tables = extract(&page(&[
        table(&[&["a", "b"], &["", " "], &["c", ""]]),
        table(&[&["", ""], &[" "]]),
        table(&[&["d"]]),
    ]));

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].row_count(), 2);
    assert_eq!(tables[1].index, 1);
    assert_eq!(tables[1].rows, vec![vec!["d".to_string()]]);
}

/// Test that a dropped blank table shifts the one-based fallback labels
#[test]
fn test_fallback_labels_follow_retained_positions() {
    let tables = extract(&page(&[
        table(&[&["quarters"]]),
        table(&[&[" "]]),
        table(&[&["主場", "TD Garden"]]),
    ]));

    let classification = classify_tables(&tables, &[]);
    let slots: Vec<&str> = classification.slots().map(|(name, _)| name).collect();

    assert_eq!(slots, vec!["Quarter Scores", "Table_2"]);
}

/// Test roster routing with fewer discovered teams than roster tables
#[test]
fn test_roster_routing_falls_back_after_teams_run_out() {
    let tables = extract(&page(&[
        table(&[&["", "Q1"], &["BOS", "塞爾蒂克"]]),
        header_table(&["球員", "先發"], &[&["Tatum", "是"]]),
        header_table(&["球員", "位置"], &[&["James", "F"]]),
    ]));
    let teams = vec![TeamName::new("塞爾蒂克")];

    let classification = classify_tables(&tables, &teams);

    let routed: Vec<(TableClass, Option<&str>)> = classification
        .tables
        .iter()
        .map(|t| (t.class, t.slot_name.as_deref()))
        .collect();
    assert_eq!(
        routed,
        vec![
            (TableClass::QuarterScores, Some("Quarter Scores")),
            (TableClass::PlayerRoster, Some("塞爾蒂克(Celtics)_Players")),
            (TableClass::PlayerRoster, Some("Table_3")),
        ]
    );
}

/// Test that every retained table is classified exactly once
#[test]
fn test_each_table_is_classified_once() {
    let session = ScrapeSession::from_html(&sample_game_page());
    let classification = session.classify();

    assert_eq!(classification.tables.len(), session.tables.len());
    for (position, classified) in classification.tables.iter().enumerate() {
        assert_eq!(classified.table.index, position);
    }
}

/// Test the consolidated season table for the sample game
#[test]
fn test_sample_season_statistics_table() {
    let session = ScrapeSession::from_html(&sample_game_page());
    let classification = session.classify();

    let season = pivot_season_stats(&classification.season_entries).unwrap();

    assert_eq!(
        season.header,
        vec![
            "Statistic",
            "塞爾蒂克(Celtics) Value",
            "塞爾蒂克(Celtics) Rank",
            "湖人(Lakers) Value",
            "湖人(Lakers) Rank",
        ]
    );
    assert_eq!(
        season.rows,
        vec![
            vec!["Assists per Game", "26.7", "5", "28.3", "2"],
            vec!["Points per Game", "120.6", "3", "117.2", "9"],
        ]
    );
}

/// Test that sheet names respect the Excel limits for long team names
#[test]
fn test_sheet_names_stay_within_limit() {
    let html = page(&[
        table(&[&["", "Q1"], &["BOS", "塞爾蒂克"], &["LAL", "湖人"]]),
        header_table(&["球員", "位置"], &[&["Tatum", "F"]]),
        header_table(&["球員", "位置"], &[&["James", "F"]]),
    ]);
    let session = ScrapeSession::from_html(&html);

    let plan = build_sheet_plan(&session);

    assert!(plan.iter().all(|sheet| sheet.name.chars().count() <= 31));
    let mut names: Vec<&str> = plan.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), plan.len());
}

/// Test the normalizer against aliases seen on the site
#[test]
fn test_team_name_normalization() {
    assert_eq!(normalize("湖人"), "Lakers");
    assert_eq!(normalize("塞爾提克"), "Celtics");
    assert_eq!(normalize("獨行俠"), "Mavericks");
    assert_eq!(normalize("Unknown FC"), "Unknown FC");
}
