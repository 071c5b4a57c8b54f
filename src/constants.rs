//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers, fixed labels and marker sets
//! used by the fetcher, the table heuristics and the workbook writer.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Upper bound accepted for a configured HTTP timeout in seconds
pub const MAX_HTTP_TIMEOUT_SECONDS: u64 = 300;

/// Default directory (relative to the working directory) for written workbooks
pub const DEFAULT_OUTPUT_DIR: &str = "output_excel";

/// Game page used when the user accepts the interactive default prompt
pub const DEFAULT_TEST_URL: &str =
    "https://tw-nba.udn.com/nba/standings_game/534867d1-8ef1-4929-b32c-4f766f159017";

/// Base name of the log file written by the rolling appender
pub const LOG_FILE_NAME: &str = "nba_game_scraper.log";

/// Browser-like request headers sent with the page fetch
pub mod headers {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    pub const ACCEPT: &str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
    pub const ACCEPT_LANGUAGE: &str = "zh-TW,zh;q=0.9,en;q=0.8";
    pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
    pub const CONNECTION: &str = "keep-alive";
    pub const UPGRADE_INSECURE_REQUESTS: &str = "1";
}

/// Environment variable names
pub mod env_vars {
    /// Override for the workbook output directory
    pub const OUTPUT_DIR: &str = "NBA_SCRAPER_OUTPUT_DIR";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NBA_SCRAPER_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_SCRAPER_HTTP_TIMEOUT";
}

/// Workbook sheet naming
pub mod sheets {
    /// Excel refuses sheet names longer than this (counted in characters)
    pub const MAX_SHEET_NAME_LENGTH: usize = 31;

    pub const GAME_INFO: &str = "Game Info";
    pub const PLAYER_STATS: &str = "Player Stats";
    pub const TEAM_STATS: &str = "Team Stats";
    pub const QUARTER_SCORES: &str = "Quarter Scores";
    pub const TEAM_SEASON_STATISTICS: &str = "Team Season Statistics";

    /// Suffix appended to a team display name for its roster sheet
    pub const PLAYERS_SUFFIX: &str = "_Players";

    /// Sheets a complete scrape of a game page is expected to produce
    pub const EXPECTED: [&str; 3] = [PLAYER_STATS, QUARTER_SCORES, TEAM_SEASON_STATISTICS];
}

/// Substrings used by the table heuristics
pub mod markers {
    /// A table whose header cells contain one of these holds per-player stats
    pub const PLAYER_STAT_HEADERS: [&str; 4] = ["MIN", "分鐘", "PTS", "得分"];

    /// A non-first table containing one of these is a team roster
    pub const ROSTER: [&str; 2] = ["先發", "位置"];

    /// Values in the team-name column of the quarter table that are not teams
    pub const QUARTER_LABELS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];
}
