use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use super::{ExtractionError, TextExtractor};

/// `pdf-extract` backed extractor. The parser is synchronous and can panic on
/// malformed input, so it runs on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractionError> {
        let size = bytes.len();
        let text = tokio::task::spawn_blocking(move || extract_text_from_pdf_mem(&bytes))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    ExtractionError::Panicked
                } else {
                    ExtractionError::Parse(e.to_string())
                }
            })?
            .map_err(|e| ExtractionError::Parse(format!("{e:#}")))?;

        debug!("Extracted {} chars from {} byte PDF", text.len(), size);
        Ok(text)
    }
}

fn extract_text_from_pdf_mem(bytes: &[u8]) -> anyhow::Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .context("failed to extract text from PDF bytes using pdf-extract")
}

/// Returns true if the upload looks like a PDF:
/// - file name ending in `.pdf` (case-insensitive)
/// - Content-Type: application/pdf (case-insensitive, substring match)
/// - Magic bytes: %PDF-
pub fn is_pdf(file_name: Option<&str>, content_type: Option<&str>, head: &[u8]) -> bool {
    let by_name = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    by_name || ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}
