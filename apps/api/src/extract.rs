//! PDF text extraction for uploaded documents.
//!
//! Parsing is CPU-bound and `pdf-extract` may panic on malformed input. It runs
//! inside `spawn_blocking`, and both a parse error and a panic surface as
//! [`ExtractError`]; callers turn that into an `error` field on the result.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is empty")]
    Empty,

    #[error("could not parse PDF: {0}")]
    Parse(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the text layer of a PDF held in memory.
pub fn pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    if data.is_empty() {
        return Err(ExtractError::Empty);
    }
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data)) {
        Ok(parsed) => parsed.map_err(|e| ExtractError::Parse(e.to_string())),
        Err(_) => Err(ExtractError::Aborted("parser panicked".to_string())),
    }
}

/// [`pdf_text`] off the async executor.
pub async fn pdf_text_blocking(data: Bytes) -> Result<String, ExtractError> {
    let len = data.len();
    let result = tokio::task::spawn_blocking(move || pdf_text(&data))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))
        .and_then(|inner| inner);

    match &result {
        Ok(text) => debug!(bytes = len, chars = text.chars().count(), "pdf text extracted"),
        Err(e) => warn!(bytes = len, "pdf extraction failed: {e}"),
    }
    result
}
