//! NBA Game Data Scraper Library
//!
//! This library fetches an NBA game page from tw-nba.udn.com, pulls the
//! game header, boxscores, team comparison and every table out of its
//! markup, classifies the tables heuristically and writes the result to a
//! multi-sheet Excel workbook.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_game_scraper::config::Config;
//! use nba_game_scraper::error::AppError;
//! use nba_game_scraper::scrape::scrape;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let report = scrape(
//!         "https://tw-nba.udn.com/nba/standings_game/534867d1-8ef1-4929-b32c-4f766f159017",
//!         &config,
//!         None,
//!     )
//!     .await?;
//!
//!     println!("Saved {} sheets to {}", report.export.sheets.len(), report.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! Parsing works without the network too:
//!
//! ```rust
//! use nba_game_scraper::data_fetcher::ScrapeSession;
//!
//! let html = r#"<table><tr><td></td><td>Q1</td></tr>
//!               <tr><td>BOS</td><td>塞爾蒂克</td></tr>
//!               <tr><td>LAL</td><td>湖人</td></tr></table>"#;
//! let session = ScrapeSession::from_html(html);
//!
//! assert_eq!(session.team_pair(), Some(("塞爾蒂克", "湖人")));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;
pub mod scrape;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{ScrapeSession, fetch_page};
pub use error::AppError;
pub use export::ExportReport;
pub use scrape::{ScrapeReport, scrape};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
