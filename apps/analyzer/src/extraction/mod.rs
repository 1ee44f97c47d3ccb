//! Text extraction — turns uploaded documents into plain text.
//!
//! PDFs go through a pluggable [`TextExtractor`] (default: [`PdfTextExtractor`],
//! backed by `pdf-extract`). Plain-text uploads are decoded as strict UTF-8.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`, swapped in tests for a fake.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub mod pdf;
pub mod plain;

pub use pdf::{is_pdf, PdfTextExtractor};
pub use plain::decode_plain_text;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("PDF parser panicked")]
    Panicked,

    #[error("PDF contained no extractable text")]
    Empty,
}

/// The extractor trait. Implement this to swap PDF backends without touching
/// the analyze pipeline or its handlers.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document text, pages concatenated in page order.
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Treats an extraction that produced only whitespace as a failure.
pub fn ensure_non_blank(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}
