use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use super::{group_by_position, max_value, series_color, CHART_SIZE};
use crate::table::StatsTable;

/// Assists against turnovers, one color per position.
pub fn assists_vs_turnovers(table: &StatsTable, out: &Path) -> Result<()> {
    let ast = match table.numeric("AST") {
        Some(values) if !values.is_empty() => values,
        _ => {
            warn!("AST column missing or empty; skipping assists/turnovers scatter");
            return Ok(());
        }
    };
    let tov = match table.numeric("TOV") {
        Some(values) => values,
        None => {
            warn!("TOV column missing; skipping assists/turnovers scatter");
            return Ok(());
        }
    };
    let groups = match group_by_position(table) {
        Some(groups) => groups,
        None => {
            warn!("Pos column missing; skipping assists/turnovers scatter");
            return Ok(());
        }
    };

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Assists vs. Turnovers by Position", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_value(ast) * 1.05, 0.0..max_value(tov) * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Assists per Game")
        .y_desc("Turnovers per Game")
        .draw()?;

    for (idx, (position, rows)) in groups.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(
                rows.iter()
                    .map(|&row| Circle::new((ast[row], tov[row]), 4, color.filled())),
            )?
            .label(position)
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
