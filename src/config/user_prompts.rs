//! User interaction and prompts
//!
//! Handles the interactive fallback when the scraper is started without a
//! game URL.

use crate::constants::DEFAULT_TEST_URL;
use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

/// Prints usage examples and asks whether the default test game should be used.
///
/// # Returns
/// * `Ok(true)` - The user answered `y` or `Y`
/// * `Ok(false)` - Any other answer, including an empty line or EOF
/// * `Err(AppError)` - Error reading from stdin or writing to stdout
pub async fn prompt_use_default_url() -> Result<bool, AppError> {
    println!("Error: No URL provided!");
    println!();
    println!("Usage examples:");
    println!("  nba_game_scraper https://tw-nba.udn.com/nba/standings_game/[game-id]");
    println!("  nba_game_scraper --url https://tw-nba.udn.com/nba/standings_game/[game-id]");
    println!();
    println!("Default URL for testing:");
    println!("  {DEFAULT_TEST_URL}");
    println!();

    let mut stdout = io::stdout();
    stdout
        .write_all(b"Use default URL for testing? (y/n): ")
        .await?;
    stdout.flush().await?;

    let mut input = String::new();
    let mut reader = io::BufReader::new(io::stdin());
    reader.read_line(&mut input).await?;
    Ok(is_affirmative(&input))
}

/// Interprets a prompt answer; only a lone `y` (any case) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
