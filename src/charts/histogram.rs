use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use super::{max_value, CHART_SIZE};
use crate::table::StatsTable;

const BIN_COUNT: usize = 20;

/// Distribution of points per game over equal-width bins.
pub fn points_histogram(table: &StatsTable, out: &Path) -> Result<()> {
    let pts = match table.numeric("PTS") {
        Some(values) if !values.is_empty() => values,
        _ => {
            warn!("PTS column missing or empty; skipping points histogram");
            return Ok(());
        }
    };

    let bins = bin_counts(pts, BIN_COUNT);
    let y_max = bins.iter().map(|&(_, _, count)| count).max().unwrap_or(0) as f64;
    let x_min = pts.iter().copied().fold(f64::MAX, f64::min);
    let x_max = max_value(pts);

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Points per Game", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max * 1.02, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Points per Game")
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(bins.iter().map(|&(start, end, count)| {
        Rectangle::new([(start, 0.0), (end, count as f64)], BLUE.mix(0.5).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Equal-width bins over the value range; the last bin is closed on the
/// right so the maximum lands inside it.
fn bin_counts(values: &[f64], bins: usize) -> Vec<(f64, f64, usize)> {
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let width = ((max - min) / bins as f64).max(f64::EPSILON);

    let mut out = Vec::with_capacity(bins);
    for i in 0..bins {
        let start = min + i as f64 * width;
        let end = start + width;
        let last = i == bins - 1;
        let count = values
            .iter()
            .filter(|&&v| v >= start && (v < end || (last && v <= end)))
            .count();
        out.push((start, end, count));
    }
    out
}
