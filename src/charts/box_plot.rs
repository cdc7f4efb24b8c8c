use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use super::{group_by_position, max_value, series_color, CHART_SIZE};
use crate::table::StatsTable;

/// Quartile boxes of points per game, one box per position.
pub fn points_by_position(table: &StatsTable, out: &Path) -> Result<()> {
    let pts = match table.numeric("PTS") {
        Some(values) if !values.is_empty() => values,
        _ => {
            warn!("PTS column missing or empty; skipping box plot");
            return Ok(());
        }
    };
    let groups = match group_by_position(table) {
        Some(groups) => groups,
        None => {
            warn!("Pos column missing; skipping box plot");
            return Ok(());
        }
    };

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = groups.iter().map(|(pos, _)| pos.clone()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption("Points Per Game by Position", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..groups.len()).into_segmented(),
            0.0..max_value(pts) * 1.05,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len())
        .x_label_formatter(&move |seg| match seg {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .x_desc("Position")
        .y_desc("Points Per Game")
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(idx, (_, rows))| {
        let values: Vec<f64> = rows.iter().map(|&row| pts[row]).collect();
        Boxplot::new_vertical(SegmentValue::CenterOf(idx), &Quartiles::new(&values))
            .width(28)
            .style(series_color(idx))
    }))?;

    root.present()?;
    Ok(())
}
