use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::warn;

use crate::table::StatsTable;

/// Pearson correlation heatmap over the given columns, annotated with the
/// coefficients. Columns that are absent or non-numeric are left out.
pub fn correlation_heatmap(table: &StatsTable, columns: &[String], out: &Path) -> Result<()> {
    let mut names: Vec<&str> = Vec::new();
    let mut data: Vec<&[f64]> = Vec::new();
    for name in columns {
        match table.numeric(name) {
            Some(values) => {
                names.push(name);
                data.push(values);
            }
            None => warn!("column `{}` missing or non-numeric; left out of heatmap", name),
        }
    }

    if names.len() < 2 || table.is_empty() {
        warn!("fewer than two numeric columns; skipping correlation heatmap");
        return Ok(());
    }

    let matrix = correlation_matrix(&data);
    let n = names.len();

    let root = BitMapBackend::new(out, (960, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let label_names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    let x_names = label_names.clone();
    let y_names = label_names;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Heatmap of Key Stats", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&move |v| cell_label(&x_names, *v))
        .y_label_formatter(&move |v| cell_label(&y_names, *v))
        .draw()?;

    chart.draw_series((0..n).flat_map(|i| {
        let matrix = &matrix;
        (0..n).map(move |j| {
            Rectangle::new(
                [(i as f64, j as f64), (i as f64 + 1.0, j as f64 + 1.0)],
                diverging_color(matrix[i][j]).filled(),
            )
        })
    }))?;

    chart.draw_series((0..n).flat_map(|i| {
        let matrix = &matrix;
        (0..n).map(move |j| {
            Text::new(
                format!("{:.2}", matrix[i][j]),
                (i as f64 + 0.35, j as f64 + 0.55),
                ("sans-serif", 18),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

fn cell_label(names: &[String], v: f64) -> String {
    let idx = v as usize;
    if (v - idx as f64).abs() < f64::EPSILON && idx < names.len() {
        names[idx].clone()
    } else {
        String::new()
    }
}

/// Map a coefficient in [-1, 1] onto a blue/white/red diverging scale.
fn diverging_color(v: f64) -> RGBColor {
    let v = v.clamp(-1.0, 1.0);
    let blend = |from: (f64, f64, f64), to: (f64, f64, f64), t: f64| {
        RGBColor(
            (from.0 + (to.0 - from.0) * t) as u8,
            (from.1 + (to.1 - from.1) * t) as u8,
            (from.2 + (to.2 - from.2) * t) as u8,
        )
    };
    let blue = (59.0, 76.0, 192.0);
    let white = (245.0, 245.0, 245.0);
    let red = (180.0, 4.0, 38.0);
    if v < 0.0 {
        blend(blue, white, v + 1.0)
    } else {
        blend(white, red, v)
    }
}

/// Pairwise Pearson coefficients; the diagonal is exactly 1.
fn correlation_matrix(columns: &[&[f64]]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            matrix[i][j] = if i == j {
                1.0
            } else {
                pearson(columns[i], columns[j])
            };
        }
    }
    matrix
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for i in 0..x.len() {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        // constant column
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_correlated_series() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfectly_anticorrelated_series() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_yields_zero_not_nan() {
        let x = [5.0, 5.0, 5.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&x, &y), 0.0);
    }

    #[test]
    fn matrix_diagonal_is_one() {
        let a = [1.0, 2.0, 3.0];
        let b = [9.0, 1.0, 4.0];
        let m = correlation_matrix(&[&a, &b]);
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert!((m[0][1] - m[1][0]).abs() < 1e-12);
    }
}
