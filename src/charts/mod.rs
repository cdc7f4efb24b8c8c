//! Chart renderers. Each one reads the stats table, writes one PNG, and
//! skips with a warning when a column it needs is absent. None of them
//! mutate the table or depend on another chart.

pub mod box_plot;
pub mod bubble;
pub mod heatmap;
pub mod histogram;
pub mod radar;
pub mod scatter;
pub mod top_scorers;

pub use box_plot::points_by_position;
pub use bubble::points_vs_rebounds;
pub use heatmap::correlation_heatmap;
pub use histogram::points_histogram;
pub use radar::{skill_radar, RadarOutcome};
pub use scatter::assists_vs_turnovers;
pub use top_scorers::top_scorers;

use std::collections::BTreeMap;

use plotters::style::{Palette, Palette99, PaletteColor};

use crate::table::StatsTable;

pub(crate) const CHART_SIZE: (u32, u32) = (1280, 800);

/// One color per series index, stable across charts.
pub(crate) fn series_color(idx: usize) -> PaletteColor<Palette99> {
    Palette99::pick(idx)
}

/// Row indices grouped by the `Pos` column, alphabetical by position.
pub(crate) fn group_by_position(table: &StatsTable) -> Option<Vec<(String, Vec<usize>)>> {
    let positions = table.text("Pos")?;
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, pos) in positions.iter().enumerate() {
        groups.entry(pos).or_default().push(idx);
    }
    Some(
        groups
            .into_iter()
            .map(|(pos, rows)| (pos.to_string(), rows))
            .collect(),
    )
}

pub(crate) fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::MIN, f64::max)
}
