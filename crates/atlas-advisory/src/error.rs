use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Risk endpoint returned status {code}: {body}")]
    Status { code: u16, body: String },
}
