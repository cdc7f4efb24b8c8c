use std::f64::consts::PI;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use crate::table::{StatsTable, PLAYER_COLUMN};

/// Stats plotted on the radar axes, clockwise from the top.
pub const RADAR_CATEGORIES: &[&str] = &["PTS", "AST", "TRB", "STL", "BLK"];

/// What the radar renderer did. A missing player or too few usable axes is
/// a no-op with a log line, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarOutcome {
    Rendered,
    PlayerNotFound,
    TooFewAxes,
}

/// Filename for a player's radar chart.
pub fn output_name(player: &str) -> String {
    let slug: String = player
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("radar_{}.png", slug)
}

/// One player's key stats on a closed polygon, axes scaled to the player's
/// own maximum.
pub fn skill_radar(table: &StatsTable, player: &str, out: &Path) -> Result<RadarOutcome> {
    let row = match table.find_row(PLAYER_COLUMN, player) {
        Some(row) => row,
        None => {
            warn!("Player {} not found in the dataset.", player);
            return Ok(RadarOutcome::PlayerNotFound);
        }
    };

    let mut categories: Vec<&str> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    for &name in RADAR_CATEGORIES {
        match table.numeric(name) {
            Some(column) => {
                categories.push(name);
                values.push(column[row]);
            }
            None => warn!("column `{}` missing or non-numeric; dropped from radar", name),
        }
    }

    if categories.len() < 3 {
        warn!(
            "only {} usable radar axes for {}; skipping radar chart",
            categories.len(),
            player
        );
        return Ok(RadarOutcome::TooFewAxes);
    }

    let r_max = values.iter().copied().fold(f64::MIN, f64::max).max(f64::EPSILON);
    let n = categories.len();
    // Clockwise from twelve o'clock.
    let angle = |i: usize| PI / 2.0 - i as f64 / n as f64 * 2.0 * PI;
    let point = |i: usize, r: f64| (r * angle(i).cos(), r * angle(i).sin());

    let root = BitMapBackend::new(out, (900, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Skill Comparison", player), ("sans-serif", 28))
        .margin(20)
        .build_cartesian_2d(-1.45..1.45, -1.45..1.45)?;

    // Concentric reference rings and one spoke per axis.
    for ring in 1..=4 {
        let r = ring as f64 / 4.0;
        let outline: Vec<(f64, f64)> = (0..=n).map(|i| point(i % n, r)).collect();
        chart.draw_series(std::iter::once(PathElement::new(outline, BLACK.mix(0.15))))?;
    }
    for i in 0..n {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), point(i, 1.0)],
            BLACK.mix(0.15),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            categories[i].to_string(),
            point(i, 1.18),
            ("sans-serif", 18),
        )))?;
    }

    // The player's polygon, filled and outlined.
    let scaled: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| point(i, v / r_max))
        .collect();
    let mut closed = scaled.clone();
    closed.push(scaled[0]);

    chart.draw_series(std::iter::once(Polygon::new(scaled, BLUE.mix(0.4).filled())))?;
    chart
        .draw_series(std::iter::once(PathElement::new(
            closed,
            BLUE.stroke_width(2),
        )))?
        .label(player)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(RadarOutcome::Rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{normalize, RawTable};
    use tempfile::tempdir;

    fn table() -> StatsTable {
        normalize(RawTable {
            headers: ["Player", "PTS", "AST", "TRB", "STL", "BLK"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows: vec![["LeBron James", "25.5", "7.2", "8.1", "1.2", "0.6"]
                .iter()
                .map(|s| s.to_string())
                .collect()],
        })
    }

    #[test]
    fn unknown_player_is_a_quiet_no_op() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("radar.png");
        let outcome = skill_radar(&table(), "John Doe", &out).unwrap();
        assert_eq!(outcome, RadarOutcome::PlayerNotFound);
        assert!(!out.exists());
    }

    #[test]
    fn too_few_axes_skips_without_rendering() {
        let table = normalize(RawTable {
            headers: vec!["Player".into(), "PTS".into()],
            rows: vec![vec!["LeBron James".into(), "25.5".into()]],
        });
        let dir = tempdir().unwrap();
        let out = dir.path().join("radar.png");
        let outcome = skill_radar(&table, "LeBron James", &out).unwrap();
        assert_eq!(outcome, RadarOutcome::TooFewAxes);
        assert!(!out.exists());
    }

    #[test]
    fn slug_is_filesystem_safe() {
        assert_eq!(output_name("LeBron James"), "radar_lebron_james.png");
        assert_eq!(output_name("Luka Dončić"), "radar_luka_dončić.png");
    }
}
