use anyhow::Result;
use hoopscraper::{
    charts::{self, RadarOutcome},
    config::Config,
    fetch, table,
};
use reqwest::blocking::Client;
use std::fs;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    let cfg = Config::from_env();

    // ─── 3) acquire the stats table ──────────────────────────────────
    let client = Client::new();
    info!("fetching {}", cfg.stats_url);
    let body = fetch::fetch_document(&client, &cfg.stats_url)?;
    let raw = fetch::extract_table(&body, &cfg.table_id)?;
    info!(
        "extracted table `{}`: {} rows, {} columns",
        cfg.table_id,
        raw.rows.len(),
        raw.headers.len()
    );

    // ─── 4) normalize ────────────────────────────────────────────────
    let stats = table::normalize(raw);
    info!("normalized to {} player rows", stats.len());
    info!("available columns: {:?}", stats.headers());

    // ─── 5) check expected stat columns ──────────────────────────────
    let check = table::check_expected(&stats, table::EXPECTED_STAT_COLUMNS);
    if !check.all_present() {
        warn!("some columns are missing: {:?}", check.missing);
    }

    // ─── 6) render charts, each isolated ─────────────────────────────
    fs::create_dir_all(&cfg.charts_dir)?;
    let dir = &cfg.charts_dir;

    let results = [
        (
            "points histogram",
            charts::points_histogram(&stats, &dir.join("points_histogram.png")),
        ),
        (
            "assists/turnovers scatter",
            charts::assists_vs_turnovers(&stats, &dir.join("assists_vs_turnovers.png")),
        ),
        (
            "correlation heatmap",
            charts::correlation_heatmap(&stats, &check.present, &dir.join("correlation_heatmap.png")),
        ),
        (
            "top scorers",
            charts::top_scorers(&stats, &dir.join("top_scorers.png")),
        ),
        (
            "points/rebounds bubble",
            charts::points_vs_rebounds(&stats, &dir.join("points_vs_rebounds.png")),
        ),
        (
            "points by position box plot",
            charts::points_by_position(&stats, &dir.join("points_by_position.png")),
        ),
    ];
    for (name, result) in results {
        match result {
            Ok(()) => info!("{} done", name),
            Err(e) => error!("{} failed: {:#}", name, e),
        }
    }

    let radar_out = dir.join(charts::radar::output_name(&cfg.radar_player));
    match charts::skill_radar(&stats, &cfg.radar_player, &radar_out) {
        Ok(RadarOutcome::Rendered) => info!("skill radar done for {}", cfg.radar_player),
        // already logged by the renderer
        Ok(RadarOutcome::PlayerNotFound) | Ok(RadarOutcome::TooFewAxes) => {}
        Err(e) => error!("skill radar failed: {:#}", e),
    }

    info!("all done; charts in {}", dir.display());
    Ok(())
}
