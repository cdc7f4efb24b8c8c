// src/fetch.rs

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ScrapeError;
use crate::table::RawTable;

static HEAD_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("thead tr").expect("selector should parse"));
static BODY_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody tr").expect("selector should parse"));
static ANY_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("selector should parse"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("selector should parse"));

/// Fetch the stats page and return its body as text.
/// Any non-success status is fatal; there are no retries.
pub fn fetch_document(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).with_context(|| format!("parsing stats URL {}", url_str))?;

    let resp = client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Fetch {
            url: url_str.to_string(),
            status,
        }
        .into());
    }

    resp.text()
        .with_context(|| format!("reading body from {}", url))
}

/// Locate `table#<table_id>` in the document and flatten it into a
/// `RawTable` of trimmed cell strings.
///
/// Header names come from the *last* `<thead>` row: this source stacks a
/// grouping row above the real column header. Repeated header rows inside
/// `<tbody>` come through as ordinary data rows and are dealt with during
/// normalization.
pub fn extract_table(html: &str, table_id: &str) -> Result<RawTable> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse(&format!("table#{}", table_id))
        .map_err(|e| anyhow!("invalid table selector for id `{}`: {:?}", table_id, e))?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScrapeError::TableNotFound {
            id: table_id.to_string(),
        })?;

    let headers = match table.select(&HEAD_ROW_SELECTOR).last() {
        Some(row) => row_cells(row),
        None => Vec::new(),
    };

    // Tables without an explicit thead: first row is the header.
    if headers.is_empty() {
        let mut all: Vec<Vec<String>> = table
            .select(&ANY_ROW_SELECTOR)
            .map(row_cells)
            .filter(|cells| !cells.is_empty())
            .collect();
        if all.is_empty() {
            return Err(anyhow!("table `{}` has no rows", table_id));
        }
        let headers = all.remove(0);
        return Ok(RawTable { headers, rows: all });
    }

    let rows: Vec<Vec<String>> = table
        .select(&BODY_ROW_SELECTOR)
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(RawTable { headers, rows })
}

fn row_cells(row: ElementRef) -> Vec<String> {
    row.select(&CELL_SELECTOR)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table id="per_game_stats">
          <thead>
            <tr><th colspan="4">Per Game</th></tr>
            <tr><th>Rk</th><th>Player</th><th>Pos</th><th>PTS</th></tr>
          </thead>
          <tbody>
            <tr><th>1</th><td>LeBron James</td><td>F</td><td>25.5</td></tr>
            <tr><th>Rk</th><td>Player</td><td>Pos</td><td>PTS</td></tr>
            <tr><th>2</th><td>Joel Embiid</td><td>C</td><td>34.7</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn extracts_header_from_last_thead_row() {
        let raw = extract_table(PAGE, "per_game_stats").unwrap();
        assert_eq!(raw.headers, vec!["Rk", "Player", "Pos", "PTS"]);
        assert_eq!(raw.rows.len(), 3);
        assert_eq!(raw.rows[0][1], "LeBron James");
        // the repeated header row survives extraction; cleaning removes it
        assert_eq!(raw.rows[1][1], "Player");
    }

    #[test]
    fn missing_table_is_a_typed_error() {
        let err = extract_table(PAGE, "advanced_stats").unwrap_err();
        match err.downcast_ref::<ScrapeError>() {
            Some(ScrapeError::TableNotFound { id }) => assert_eq!(id, "advanced_stats"),
            other => panic!("expected TableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn fetch_error_carries_the_status() {
        let err = ScrapeError::Fetch {
            url: "http://example.test/stats".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn headerless_table_uses_first_row() {
        let html = r#"
            <table id="t">
              <tr><td>Player</td><td>PTS</td></tr>
              <tr><td>Jrue Holiday</td><td>12.5</td></tr>
            </table>"#;
        let raw = extract_table(html, "t").unwrap();
        assert_eq!(raw.headers, vec!["Player", "PTS"]);
        assert_eq!(raw.rows, vec![vec!["Jrue Holiday", "12.5"]]);
    }
}
