// src/main.rs
use clap::Parser;
use nba_game_scraper::cli::Args;
use nba_game_scraper::commands::{
    handle_config_update_command, handle_list_config_command, handle_scrape_command,
    resolve_game_url,
};
use nba_game_scraper::config::Config;
use nba_game_scraper::error::AppError;
use nba_game_scraper::logging::setup_logging;
use nba_game_scraper::{NAME, VERSION};
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, AppError> {
    let args = Args::parse();

    // Config commands run and exit without touching the network
    if args.list_config {
        handle_list_config_command().await?;
        return Ok(ExitCode::SUCCESS);
    }

    if args.is_config_update() {
        handle_config_update_command(&args).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load().await?;

    // Keep the guard in scope so buffered log lines are flushed on exit
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("{NAME} {VERSION} starting");
    info!("Logs are being written to: {log_file_path}");

    let Some(url) = resolve_game_url(&args).await? else {
        return Ok(ExitCode::FAILURE);
    };

    if handle_scrape_command(&url, &args, &config).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
