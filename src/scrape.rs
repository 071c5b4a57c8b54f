//! One end-to-end scrape: fetch, extract, classify, write.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::data_fetcher::fetch::fetch_page;
use crate::data_fetcher::http_client::create_http_client_with_timeout;
use crate::data_fetcher::models::TeamName;
use crate::data_fetcher::session::ScrapeSession;
use crate::error::AppError;
use crate::export::{ExportReport, build_sheet_plan, output_path, write_workbook};

/// Counts and the written workbook of a finished scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub output_path: PathBuf,
    pub player_stats: usize,
    pub team_stats: usize,
    pub tables: usize,
    pub season_entries: usize,
    pub data_snippets: usize,
    /// Discovered teams as `localized(canonical)`
    pub team_names: Vec<String>,
    pub export: ExportReport,
}

/// Fetches `url` and writes its workbook.
///
/// A failed fetch aborts before anything touches the disk. The workbook
/// goes to `output` if given, else into `config.output_dir`.
#[instrument(skip(config))]
pub async fn scrape(
    url: &str,
    config: &Config,
    output: Option<&Path>,
) -> Result<ScrapeReport, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let html = fetch_page(&client, url).await?;

    let session = ScrapeSession::from_html(&html);
    export_session(&session, config, output, &Local::now().naive_local())
}

/// Writes an already parsed session. `timestamp` names the generated file.
pub fn export_session(
    session: &ScrapeSession,
    config: &Config,
    output: Option<&Path>,
    timestamp: &NaiveDateTime,
) -> Result<ScrapeReport, AppError> {
    let path = output_path(&config.output_dir, session.team_pair(), output, timestamp);
    let plan = build_sheet_plan(session);
    let season_entries = session.classify().season_entries.len();

    let export = write_workbook(&path, &plan).inspect_err(|e| {
        error!("Error saving to Excel: {e}");
    })?;
    info!("Data saved to: {}", path.display());

    Ok(ScrapeReport {
        output_path: path,
        player_stats: session.player_stats.len(),
        team_stats: session.team_stats.len(),
        tables: session.tables.len(),
        season_entries,
        data_snippets: session.data_snippets.len(),
        team_names: session.team_names.iter().map(TeamName::display_name).collect(),
        export,
    })
}
