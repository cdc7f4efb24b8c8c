use reqwest::StatusCode;
use thiserror::Error;

/// Fatal errors from the acquisition stage. Anything past acquisition is
/// either a plain value (missing columns, absent radar player) or an
/// `anyhow` chain from a renderer.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request for {url} failed with status {status}")]
    Fetch { url: String, status: StatusCode },

    #[error("no table with id `{id}` in the fetched document")]
    TableNotFound { id: String },
}
