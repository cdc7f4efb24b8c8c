use tracing::{debug, warn};

use super::{coerce, RawTable, StatsTable, PLAYER_COLUMN};

/// Normalize a raw table into a `StatsTable`.
///
/// Step order matters: repeated header rows must be gone before coercion,
/// otherwise their labels would poison every numeric column, and fills must
/// happen after the drops so filler zeros never resurrect a dropped row.
pub fn normalize(mut raw: RawTable) -> StatsTable {
    drop_missing_player(&mut raw);
    drop_repeated_header(&mut raw);
    fill_missing(&mut raw);
    coerce::coerce_columns(raw)
}

/// Remove rows whose player-name cell is empty or absent.
pub fn drop_missing_player(raw: &mut RawTable) {
    let idx = match raw.player_column() {
        Some(idx) => idx,
        None => {
            warn!("no `{}` column; skipping missing-player drop", PLAYER_COLUMN);
            return;
        }
    };

    let before = raw.rows.len();
    raw.rows
        .retain(|row| row.get(idx).map(|cell| !cell.is_empty()).unwrap_or(false));
    if raw.rows.len() < before {
        debug!("dropped {} rows without a player name", before - raw.rows.len());
    }
}

/// Remove repeated in-table header rows, a known artifact of the source
/// markup: the header row shows up again mid-table with the player cell
/// holding the literal column label.
pub fn drop_repeated_header(raw: &mut RawTable) {
    let idx = match raw.player_column() {
        Some(idx) => idx,
        None => {
            warn!("no `{}` column; skipping repeated-header drop", PLAYER_COLUMN);
            return;
        }
    };

    let before = raw.rows.len();
    raw.rows
        .retain(|row| row.get(idx).map(|cell| cell != PLAYER_COLUMN).unwrap_or(true));
    if raw.rows.len() < before {
        debug!("dropped {} repeated header rows", before - raw.rows.len());
    }
}

/// Replace every empty cell with `"0"` and pad short rows out to the header
/// width, so no missing value survives into coercion.
pub fn fill_missing(raw: &mut RawTable) {
    let width = raw.headers.len();
    for row in &mut raw.rows {
        for cell in row.iter_mut() {
            if cell.is_empty() {
                *cell = "0".to_string();
            }
        }
        while row.len() < width {
            row.push("0".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnValues;
    use tracing_subscriber::{fmt, EnvFilter};

    fn init_logging() {
        let _ = fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(false)
            .try_init();
    }

    fn sample() -> RawTable {
        RawTable {
            headers: vec!["Player", "Pos", "PTS", "AST"]
                .into_iter()
                .map(String::from)
                .collect(),
            rows: vec![
                vec!["LeBron James", "F", "25.5", "7.2"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                vec!["Player", "Pos", "PTS", "AST"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                vec!["", "C", "10.0", "1.0"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ],
        }
    }

    #[test]
    fn normalizes_to_single_clean_row() {
        init_logging();
        let table = normalize(sample());
        assert_eq!(table.len(), 1);
        assert_eq!(table.text("Player").unwrap(), ["LeBron James"]);
        assert_eq!(table.text("Pos").unwrap(), ["F"]);
        assert_eq!(table.numeric("PTS").unwrap(), [25.5]);
        assert_eq!(table.numeric("AST").unwrap(), [7.2]);
    }

    #[test]
    fn player_cells_never_empty_or_header() {
        let mut raw = sample();
        drop_missing_player(&mut raw);
        drop_repeated_header(&mut raw);
        let idx = raw.player_column().unwrap();
        for row in &raw.rows {
            assert!(!row[idx].is_empty());
            assert_ne!(row[idx], PLAYER_COLUMN);
        }
    }

    #[test]
    fn fill_pads_short_rows_and_blanks() {
        let mut raw = RawTable {
            headers: vec!["Player".into(), "PTS".into(), "AST".into()],
            rows: vec![vec!["Kyle Lowry".into(), "".into()]],
        };
        fill_missing(&mut raw);
        assert_eq!(raw.rows[0], vec!["Kyle Lowry", "0", "0"]);
    }

    #[test]
    fn row_cleaning_is_idempotent() {
        let mut once = sample();
        drop_missing_player(&mut once);
        drop_repeated_header(&mut once);
        fill_missing(&mut once);

        let mut twice = once.clone();
        drop_missing_player(&mut twice);
        drop_repeated_header(&mut twice);
        fill_missing(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn missing_player_column_leaves_rows_alone() {
        let mut raw = RawTable {
            headers: vec!["Team".into(), "W".into()],
            rows: vec![vec!["BOS".into(), "64".into()]],
        };
        drop_missing_player(&mut raw);
        drop_repeated_header(&mut raw);
        assert_eq!(raw.rows.len(), 1);
    }

    #[test]
    fn mixed_column_stays_textual() {
        let raw = RawTable {
            headers: vec!["Player".into(), "Age".into()],
            rows: vec![
                vec!["Al Horford".into(), "37".into()],
                vec!["Dario Saric".into(), "n/a".into()],
            ],
        };
        let table = normalize(raw);
        match table.column("Age").unwrap() {
            ColumnValues::Text(values) => assert_eq!(values, &["37", "n/a"]),
            ColumnValues::Numeric(_) => panic!("mixed column must not coerce"),
        }
    }
}
