pub mod clean;
pub mod coerce;
pub mod columns;

pub use clean::normalize;
pub use columns::{check_expected, ColumnCheck, EXPECTED_STAT_COLUMNS};

/// Column label under which the source table lists player names. The same
/// literal shows up again in repeated in-table header rows.
pub const PLAYER_COLUMN: &str = "Player";

/// An HTML table flattened to strings, exactly as the markup claims it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Each data row, one `String` per cell.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the player-name column, if the table has one.
    pub fn player_column(&self) -> Option<usize> {
        self.headers.iter().position(|h| h == PLAYER_COLUMN)
    }
}

/// Values of one column after coercion: numeric iff every cell parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Text(Vec<String>),
    Numeric(Vec<f64>),
}

/// The normalized stats table: one row per player-season record, columns
/// addressed by the source header names.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    headers: Vec<String>,
    columns: Vec<ColumnValues>,
    row_count: usize,
}

impl StatsTable {
    pub(crate) fn new(headers: Vec<String>, columns: Vec<ColumnValues>, row_count: usize) -> Self {
        StatsTable {
            headers,
            columns,
            row_count,
        }
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnValues> {
        let idx = self.headers.iter().position(|h| h == name)?;
        self.columns.get(idx)
    }

    /// The column's values when it coerced to numeric.
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        match self.column(name)? {
            ColumnValues::Numeric(values) => Some(values),
            ColumnValues::Text(_) => None,
        }
    }

    /// The column's values when it stayed textual.
    pub fn text(&self, name: &str) -> Option<&[String]> {
        match self.column(name)? {
            ColumnValues::Text(values) => Some(values),
            ColumnValues::Numeric(_) => None,
        }
    }

    /// Row index of the first row whose `column` cell equals `value`.
    pub fn find_row(&self, column: &str, value: &str) -> Option<usize> {
        self.text(column)?.iter().position(|cell| cell == value)
    }
}
