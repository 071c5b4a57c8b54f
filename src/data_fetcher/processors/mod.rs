//! Section parsers: each one looks for a specific block of the game page
//! independently of the generic table extractor.

pub mod game_info;
pub mod player_stats;
pub mod quarter_scores;
pub mod team_stats;

pub use game_info::parse_game_info;
pub use player_stats::parse_player_stats;
pub use quarter_scores::parse_quarter_scores;
pub use team_stats::parse_team_stats;
