use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use super::{group_by_position, max_value, series_color, CHART_SIZE};
use crate::table::StatsTable;

const MIN_RADIUS: f64 = 4.0;
const MAX_RADIUS: f64 = 20.0;

/// Points against rebounds, bubble radius scaled by assists, one color per
/// position.
pub fn points_vs_rebounds(table: &StatsTable, out: &Path) -> Result<()> {
    let pts = match table.numeric("PTS") {
        Some(values) if !values.is_empty() => values,
        _ => {
            warn!("PTS column missing or empty; skipping bubble plot");
            return Ok(());
        }
    };
    let trb = match table.numeric("TRB") {
        Some(values) => values,
        None => {
            warn!("TRB column missing; skipping bubble plot");
            return Ok(());
        }
    };
    let ast = match table.numeric("AST") {
        Some(values) => values,
        None => {
            warn!("AST column missing; skipping bubble plot");
            return Ok(());
        }
    };
    let groups = match group_by_position(table) {
        Some(groups) => groups,
        None => {
            warn!("Pos column missing; skipping bubble plot");
            return Ok(());
        }
    };

    let ast_max = max_value(ast).max(f64::EPSILON);
    let radius = |row: usize| {
        (MIN_RADIUS + ast[row] / ast_max * (MAX_RADIUS - MIN_RADIUS)).round() as i32
    };

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Points vs. Rebounds (Bubble Size = Assists)", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_value(pts) * 1.05, 0.0..max_value(trb) * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Points Per Game")
        .y_desc("Rebounds Per Game")
        .draw()?;

    for (idx, (position, rows)) in groups.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(rows.iter().map(|&row| {
                Circle::new((pts[row], trb[row]), radius(row), color.mix(0.7).filled())
            }))?
            .label(position)
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
