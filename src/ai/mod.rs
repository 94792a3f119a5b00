pub mod gemini;
pub mod intent;
pub mod prompt;
pub mod qa;
pub mod validate;

pub use gemini::*;
pub use intent::*;
pub use qa::*;
pub use validate::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Cannot reach the Gemini API at {0}")]
    Connection(String),

    #[error("Gemini returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Model returned no usable candidates")]
    EmptyResponse,
}
