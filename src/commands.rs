use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_use_default_url;
use crate::constants::DEFAULT_TEST_URL;
use crate::error::AppError;
use crate::scrape::{ScrapeReport, scrape};
use std::path::Path;
use tracing::error;

const RULE: &str = "==================================================";

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-output-dir, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments, validates and saves it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    apply_config_updates(&mut config, args);
    config.validate()?;

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Copies the requested configuration changes from `args` into `config`.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_output_dir) = &args.new_output_dir {
        config.output_dir = new_output_dir.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Picks the game URL from the arguments or, when none was given, asks
/// whether to use the default test game.
///
/// Returns `None` when the user declines.
pub async fn resolve_game_url(args: &Args) -> Result<Option<String>, AppError> {
    if let Some(url) = args.game_url() {
        return Ok(Some(url.to_string()));
    }

    if prompt_use_default_url().await? {
        Ok(Some(DEFAULT_TEST_URL.to_string()))
    } else {
        Ok(None)
    }
}

/// Handles a scrape of `url`, printing progress and the final summary.
///
/// Returns whether a workbook was written.
pub async fn handle_scrape_command(url: &str, args: &Args, config: &Config) -> bool {
    println!("Starting NBA Game Scraper...");
    println!("{RULE}");
    println!("URL: {url}");

    match scrape(url, config, args.output.as_deref().map(Path::new)).await {
        Ok(report) => {
            print_summary(&report);
            true
        }
        Err(e) => {
            error!("Scrape of {url} failed: {e}");
            println!("Error: {e}");
            println!("Scraping failed. Please check the error messages above.");
            false
        }
    }
}

fn print_summary(report: &ScrapeReport) {
    println!("{RULE}");
    println!("Scraping completed successfully!");
    println!("Data saved to: {}", report.output_path.display());
    println!("Total player stats collected: {}", report.player_stats);
    println!("Total team stats collected: {}", report.team_stats);
    println!("Total tables found: {}", report.tables);
    if report.season_entries > 0 {
        println!("Consolidated {} team statistics entries", report.season_entries);
    }
    if !report.team_names.is_empty() {
        println!("Team names found: {}", report.team_names.join(", "));
    }

    println!();
    println!("Sheets ({}):", report.export.sheets.len());
    for sheet in &report.export.sheets {
        println!("  - {}: {} rows x {} columns", sheet.name, sheet.rows, sheet.columns);
    }

    let team_sheets = report.export.team_player_sheets();
    if !team_sheets.is_empty() {
        println!("Team player sheets: {}", team_sheets.join(", "));
    }
    for missing in report.export.missing_expected_sheets() {
        println!("Missing expected sheet: {missing}");
    }
}
