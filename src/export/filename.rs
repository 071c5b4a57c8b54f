use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Timestamp embedded in generated workbook names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Prefix used when the two teams are unknown
pub const GENERIC_FILE_PREFIX: &str = "nba_game_data";

/// `<team1>_<team2>_<timestamp>.xlsx`, or `nba_game_data_<timestamp>.xlsx`
/// without a team pair.
pub fn workbook_file_name(teams: Option<(&str, &str)>, timestamp: &NaiveDateTime) -> String {
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    match teams {
        Some((first, second)) => format!("{first}_{second}_{stamp}.xlsx"),
        None => format!("{GENERIC_FILE_PREFIX}_{stamp}.xlsx"),
    }
}

/// Where the workbook goes: `explicit` if given, otherwise a generated
/// name inside `output_dir`.
pub fn output_path(
    output_dir: &str,
    teams: Option<(&str, &str)>,
    explicit: Option<&Path>,
    timestamp: &NaiveDateTime,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => Path::new(output_dir).join(workbook_file_name(teams, timestamp)),
    }
}
