use tracing::debug;

use super::{ColumnValues, RawTable, StatsTable};

/// Turn cleaned rows into typed columns.
///
/// Coercion is all-or-nothing per column: one cell that fails to parse keeps
/// the whole column textual. There is never a column mixing numbers and
/// strings.
pub fn coerce_columns(raw: RawTable) -> StatsTable {
    let row_count = raw.rows.len();
    let mut columns = Vec::with_capacity(raw.headers.len());

    for (idx, name) in raw.headers.iter().enumerate() {
        let cells: Vec<&str> = raw
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or("0"))
            .collect();

        columns.push(coerce_column(name, &cells));
    }

    StatsTable::new(raw.headers, columns, row_count)
}

fn coerce_column(name: &str, cells: &[&str]) -> ColumnValues {
    let mut numeric = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell.parse::<f64>() {
            Ok(v) => numeric.push(v),
            Err(_) => {
                debug!("column `{}` stays textual: `{}` is not numeric", name, cell);
                return ColumnValues::Text(cells.iter().map(|c| c.to_string()).collect());
            }
        }
    }
    ColumnValues::Numeric(numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn fully_numeric_column_coerces() {
        let table = coerce_columns(raw(
            &["PTS", "Pos"],
            &[&["25.5", "F"], &["10.0", "C"], &["0", "G"]],
        ));
        assert_eq!(table.numeric("PTS").unwrap(), [25.5, 10.0, 0.0]);
        assert_eq!(table.text("Pos").unwrap(), ["F", "C", "G"]);
    }

    #[test]
    fn one_bad_cell_keeps_whole_column_textual() {
        let table = coerce_columns(raw(&["MP"], &[&["34.1"], &["DNP"], &["12.0"]]));
        assert!(table.numeric("MP").is_none());
        assert_eq!(table.text("MP").unwrap(), ["34.1", "DNP", "12.0"]);
    }

    #[test]
    fn empty_table_keeps_headers() {
        let table = coerce_columns(raw(&["Player", "PTS"], &[]));
        assert!(table.is_empty());
        assert_eq!(table.headers(), ["Player", "PTS"]);
    }
}
