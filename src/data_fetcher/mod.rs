pub mod classifier;
pub mod fetch;
pub mod html;
pub mod http_client;
pub mod models;
pub mod processors;
pub mod session;
pub mod tables;
pub mod team_names;

pub use classifier::{Classification, SeasonStatsTable, classify_tables, pivot_season_stats};
pub use fetch::fetch_page;
pub use models::{GameInfo, PlayerStatRecord, RawTable, TeamName, TeamSeasonStatEntry, TeamStatRecord};
pub use session::ScrapeSession;
pub use tables::extract_tables;
