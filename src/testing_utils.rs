//! HTML builders for unit and integration tests.

/// Wraps body fragments into a complete UTF-8 page.
pub fn page(body: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>NBA</title></head>\n<body>\n{}\n</body></html>",
        body.join("\n")
    )
}

/// A `<table>` whose rows are all `td` cells.
pub fn table(rows: &[&[&str]]) -> String {
    let mut html = String::from("<table>");
    for row in rows {
        html.push_str(&row_html(row, "td"));
    }
    html.push_str("</table>");
    html
}

/// A `<table>` with one `th` header row followed by `td` rows.
pub fn header_table(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<table>");
    html.push_str(&row_html(headers, "th"));
    for row in rows {
        html.push_str(&row_html(row, "td"));
    }
    html.push_str("</table>");
    html
}

fn row_html(cells: &[&str], tag: &str) -> String {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect();
    format!("<tr>{cells}</tr>")
}

/// A Celtics vs Lakers game page exercising every extractor.
///
/// Tables, after extraction:
/// 0. quarter scores (also marked `quarter-scores`), teams 塞爾蒂克 and 湖人
/// 1. Celtics roster with boxscore headers, two players
/// 2. Lakers roster with boxscore headers, two players
/// 3. points season triple
/// 4. assists season triple
/// 5. season triple with an unknown category
/// 6. arena details
///
/// A trailing blank table is dropped by extraction. The header holds the
/// date, both team names and scores; the comparison block holds two stats.
/// Five `div`s qualify as data snippets.
pub fn sample_game_page() -> String {
    let roster_headers = ["球員", "位置", "先發", "MIN", "PTS"];
    page(&[
        r#"<div class="date">2024/01/15 08:30</div>"#.to_string(),
        r#"<div class="team-name">塞爾蒂克</div>"#.to_string(),
        r#"<div class="team-name">湖人</div>"#.to_string(),
        r#"<div class="score">114</div>"#.to_string(),
        r#"<div class="score">105</div>"#.to_string(),
        r#"<table class="quarter-scores">
            <tr><td></td><td>Q1</td><td>Q2</td><td>Q3</td><td>Q4</td><td>總分</td></tr>
            <tr><td>BOS</td><td>塞爾蒂克</td><td>28</td><td>30</td><td>25</td><td>31</td><td>114</td></tr>
            <tr><td>LAL</td><td>湖人</td><td>26</td><td>24</td><td>30</td><td>25</td><td>105</td></tr>
        </table>"#
            .to_string(),
        header_table(
            &roster_headers,
            &[
                &["Jayson Tatum", "F", "是", "36:12", "30"],
                &["Jaylen Brown", "G", "是", "34:05", "22"],
            ],
        ),
        header_table(
            &roster_headers,
            &[
                &["LeBron James", "F", "是", "35:40", "28"],
                &["Anthony Davis", "C", "是", "33:18", "25"],
            ],
        ),
        table(&[&["得分"], &["塞爾蒂克", "120.6", "3"], &["湖人", "117.2", "9"]]),
        table(&[&["助攻"], &["塞爾蒂克", "26.7", "5"], &["湖人", "28.3", "2"]]),
        table(&[&["犯規"], &["塞爾蒂克", "16.2", "4"], &["湖人", "17.9", "15"]]),
        table(&[&["主場", "TD Garden"], &["觀眾", "19,156"]]),
        r#"<div class="team-stats">
            <div class="stat-row">
                <span class="stat-name">籃板</span>
                <span class="home-value">45</span>
                <span class="away-value">38</span>
            </div>
            <div class="stat-row">
                <span class="stat-name">助攻</span>
                <span class="home-value">25</span>
                <span class="away-value">27</span>
            </div>
        </div>"#
            .to_string(),
        table(&[&[" "]]),
    ])
}
