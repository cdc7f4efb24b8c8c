use super::StatsTable;

/// Statistical columns the chart set expects to find in the source table.
pub const EXPECTED_STAT_COLUMNS: &[&str] = &["PTS", "AST", "TOV", "TRB", "STL", "BLK"];

/// Outcome of the expected-column check. A non-empty `missing` list is a
/// warning, not an error: charts run against `present` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCheck {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl ColumnCheck {
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Partition `expected` into columns the table has and columns it lacks,
/// preserving the requested order.
pub fn check_expected(table: &StatsTable, expected: &[&str]) -> ColumnCheck {
    let (present, missing): (Vec<&&str>, Vec<&&str>) =
        expected.iter().partition(|name| table.has_column(name));

    ColumnCheck {
        present: present.into_iter().map(|s| s.to_string()).collect(),
        missing: missing.into_iter().map(|s| s.to_string()).collect(),
    }
}
