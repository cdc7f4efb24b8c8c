use std::cmp::Ordering;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use super::{max_value, series_color};
use crate::table::StatsTable;

const TOP_N: usize = 10;

/// Horizontal bars for the ten largest per-game scoring averages.
pub fn top_scorers(table: &StatsTable, out: &Path) -> Result<()> {
    let pts = match table.numeric("PTS") {
        Some(values) if !values.is_empty() => values,
        _ => {
            warn!("PTS column missing or empty; skipping top scorers chart");
            return Ok(());
        }
    };
    let players = match table.text("Player") {
        Some(values) => values,
        None => {
            warn!("Player column missing; skipping top scorers chart");
            return Ok(());
        }
    };

    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by(|&a, &b| pts[b].partial_cmp(&pts[a]).unwrap_or(Ordering::Equal));
    let top: Vec<(&str, f64)> = order
        .into_iter()
        .take(TOP_N)
        .map(|row| (players[row].as_str(), pts[row]))
        .collect();

    let x_max = max_value(pts) * 1.1;

    let root = BitMapBackend::new(out, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = top.iter().map(|&(name, _)| name.to_string()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption("Top 10 Scorers in the NBA (Per Game)", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(200)
        .build_cartesian_2d(0.0..x_max, (0..top.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(top.len())
        .y_label_formatter(&move |seg| match seg {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .x_desc("Points Per Game")
        .y_desc("Player")
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(rank, &(_, pts))| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(rank)),
                (pts, SegmentValue::Exact(rank + 1)),
            ],
            series_color(rank).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
