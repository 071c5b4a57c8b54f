//! Chinese team names to canonical NBA short names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Every localized rendering seen on the source site, keyed to the
/// franchise's canonical short name. Several aliases may share a target
/// (translation variants, relocated or renamed franchises).
const TEAM_ALIASES: &[(&str, &str)] = &[
    // Atlantic
    ("塞爾蒂克", "Celtics"),
    ("塞爾提克", "Celtics"),
    ("凱爾特人", "Celtics"),
    ("籃網", "Nets"),
    ("布魯克林籃網", "Nets"),
    ("尼克", "Knicks"),
    ("紐約尼克", "Knicks"),
    ("76人", "76ers"),
    ("七六人", "76ers"),
    ("暴龍", "Raptors"),
    ("速龍", "Raptors"),
    // Central
    ("公牛", "Bulls"),
    ("芝加哥公牛", "Bulls"),
    ("騎士", "Cavaliers"),
    ("克里夫蘭騎士", "Cavaliers"),
    ("活塞", "Pistons"),
    ("底特律活塞", "Pistons"),
    ("溜馬", "Pacers"),
    ("印第安納溜馬", "Pacers"),
    ("公鹿", "Bucks"),
    ("密爾瓦基公鹿", "Bucks"),
    // Southeast
    ("老鷹", "Hawks"),
    ("亞特蘭大老鷹", "Hawks"),
    ("黃蜂", "Hornets"),
    ("夏洛特黃蜂", "Hornets"),
    ("熱火", "Heat"),
    ("邁阿密熱火", "Heat"),
    ("魔術", "Magic"),
    ("奧蘭多魔術", "Magic"),
    ("巫師", "Wizards"),
    ("華盛頓巫師", "Wizards"),
    // Northwest
    ("金塊", "Nuggets"),
    ("丹佛金塊", "Nuggets"),
    ("灰狼", "Timberwolves"),
    ("明尼蘇達灰狼", "Timberwolves"),
    ("雷霆", "Thunder"),
    ("俄克拉荷馬雷霆", "Thunder"),
    ("拓荒者", "Trail Blazers"),
    ("波特蘭拓荒者", "Trail Blazers"),
    ("爵士", "Jazz"),
    ("猶他爵士", "Jazz"),
    // Pacific
    ("勇士", "Warriors"),
    ("金州勇士", "Warriors"),
    ("快艇", "Clippers"),
    ("洛杉磯快艇", "Clippers"),
    ("湖人", "Lakers"),
    ("洛杉磯湖人", "Lakers"),
    ("太陽", "Suns"),
    ("鳳凰城太陽", "Suns"),
    ("國王", "Kings"),
    ("沙加緬度國王", "Kings"),
    // Southwest
    ("小牛", "Mavericks"),
    ("獨行俠", "Mavericks"),
    ("達拉斯獨行俠", "Mavericks"),
    ("火箭", "Rockets"),
    ("休士頓火箭", "Rockets"),
    ("灰熊", "Grizzlies"),
    ("曼菲斯灰熊", "Grizzlies"),
    ("鵜鶘", "Pelicans"),
    ("紐奧良鵜鶘", "Pelicans"),
    ("馬刺", "Spurs"),
    ("聖安東尼奧馬刺", "Spurs"),
];

static TEAM_NAME_MAPPING: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAM_ALIASES.iter().copied().collect());

/// Returns the canonical short name for a localized team name.
///
/// Exact match only: no trimming, case folding or fuzzy matching. Names
/// that are not in the table are returned unchanged.
///
/// # Examples
/// ```
/// use nba_game_scraper::data_fetcher::team_names::normalize;
///
/// assert_eq!(normalize("湖人"), "Lakers");
/// assert_eq!(normalize("獨行俠"), "Mavericks");
/// assert_eq!(normalize("Lakers"), "Lakers");
/// ```
pub fn normalize(name: &str) -> String {
    canonical_name(name).unwrap_or(name).to_string()
}

/// The canonical name if `name` is a known alias
pub fn canonical_name(name: &str) -> Option<&'static str> {
    TEAM_NAME_MAPPING.get(name).copied()
}

/// True if `name` is one of the known localized aliases
pub fn is_known_team(name: &str) -> bool {
    TEAM_NAME_MAPPING.contains_key(name)
}
