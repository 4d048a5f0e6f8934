use thiserror::Error;

use crate::types::Code;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no Dynalist API token provided")]
    MissingToken,

    #[error("Dynalist API error {code}: {message}")]
    Remote { code: Code, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The API's error code, if the server answered with one.
    pub fn code(&self) -> Option<&Code> {
        match self {
            ApiError::Remote { code, .. } => Some(code),
            _ => None,
        }
    }
}
