use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA Game Data Scraper
///
/// Scrapes an NBA game page from tw-nba.udn.com and saves the game info,
/// boxscores, quarter scores and team season statistics to an Excel workbook.
///
/// Without a URL the scraper offers to use a default test game.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// URL of the NBA game to scrape
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// URL of the NBA game to scrape (used when no positional URL is given)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url_flag: Option<String>,

    /// Output workbook path (default: <output dir>/<team>_<team>_<timestamp>.xlsx)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Update the output directory in config.
    #[arg(long = "set-output-dir", help_heading = "Configuration", value_name = "DIR")]
    pub new_output_dir: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration", value_name = "FILE")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print log output to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug", value_name = "FILE")]
    pub log_file: Option<String>,
}

impl Args {
    /// The positional game URL or, failing that, `--url`.
    pub fn game_url(&self) -> Option<&str> {
        [self.url.as_deref(), self.url_flag.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
    }

    /// True when a configuration update was requested instead of a scrape
    pub fn is_config_update(&self) -> bool {
        self.new_output_dir.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_url() {
        let args = Args::parse_from(["nba_game_scraper", "https://example.com/game/1"]);
        assert_eq!(args.game_url(), Some("https://example.com/game/1"));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_positional_url_wins_over_flag() {
        let args = Args::parse_from([
            "nba_game_scraper",
            "https://example.com/positional",
            "-u",
            "https://example.com/flag",
        ]);
        assert_eq!(args.game_url(), Some("https://example.com/positional"));

        let flag_only = Args::parse_from(["nba_game_scraper", "-u", "https://example.com/flag"]);
        assert_eq!(flag_only.game_url(), Some("https://example.com/flag"));
    }

    #[test]
    fn test_no_url() {
        let args = Args::parse_from(["nba_game_scraper"]);
        assert_eq!(args.game_url(), None);
        assert!(!args.is_config_update());
    }

    #[test]
    fn test_blank_url_is_treated_as_missing() {
        let args = Args::parse_from(["nba_game_scraper", "--url", "  "]);
        assert_eq!(args.game_url(), None);
    }

    #[test]
    fn test_output_and_config_flags() {
        let args = Args::parse_from([
            "nba_game_scraper",
            "-o",
            "game.xlsx",
            "--set-output-dir",
            "exports",
        ]);
        assert_eq!(args.output.as_deref(), Some("game.xlsx"));
        assert!(args.is_config_update());
    }
}
