use std::env;
use std::path::PathBuf;

/// The per-game stats page this tool was written for.
pub const DEFAULT_STATS_URL: &str =
    "https://www.basketball-reference.com/leagues/NBA_2024_per_game.html";

/// Id of the stats table within that page's markup.
pub const DEFAULT_TABLE_ID: &str = "per_game_stats";

const DEFAULT_CHARTS_DIR: &str = "charts";
const DEFAULT_RADAR_PLAYER: &str = "LeBron James";

/// Run configuration. Every field has a baked-in default and a
/// `HOOPSCRAPER_*` environment override.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to fetch.
    pub stats_url: String,
    /// Id attribute of the table to extract.
    pub table_id: String,
    /// Directory the chart PNGs are written to.
    pub charts_dir: PathBuf,
    /// Whose row the skill radar plots.
    pub radar_player: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            stats_url: env::var("HOOPSCRAPER_URL")
                .unwrap_or_else(|_| DEFAULT_STATS_URL.to_string()),
            table_id: env::var("HOOPSCRAPER_TABLE_ID")
                .unwrap_or_else(|_| DEFAULT_TABLE_ID.to_string()),
            charts_dir: env::var("HOOPSCRAPER_CHARTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHARTS_DIR)),
            radar_player: env::var("HOOPSCRAPER_PLAYER")
                .unwrap_or_else(|_| DEFAULT_RADAR_PLAYER.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_url: DEFAULT_STATS_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            radar_player: DEFAULT_RADAR_PLAYER.to_string(),
        }
    }
}
