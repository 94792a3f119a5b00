pub mod drive;
pub mod sheets;

pub use drive::*;
pub use sheets::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot reach the Google API at {0}")]
    Connection(String),

    #[error("Google API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
