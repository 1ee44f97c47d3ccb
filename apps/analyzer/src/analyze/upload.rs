//! Multipart upload collection for the analyze endpoint.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::is_pdf;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// One uploaded file, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn is_pdf(&self) -> bool {
        is_pdf(
            self.file_name.as_deref(),
            self.content_type.as_deref(),
            &self.bytes,
        )
    }

    /// A browser submits an untouched file input as an empty part with no file name.
    fn is_unselected(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Default)]
pub struct AnalyzeUploads {
    pub resume: Option<UploadedFile>,
    pub job_description: Option<UploadedFile>,
}

/// Drains the multipart body into [`AnalyzeUploads`]. Unknown parts are skipped;
/// when a part repeats, the last one wins.
pub async fn collect_uploads(mut multipart: Multipart) -> Result<AnalyzeUploads, AppError> {
    let mut uploads = AnalyzeUploads::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != RESUME_FIELD && name != JOB_DESCRIPTION_FIELD {
            debug!("Skipping unknown multipart field '{name}'");
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await?;

        let file = UploadedFile {
            file_name,
            content_type,
            bytes,
        };
        if file.is_unselected() {
            continue;
        }

        debug!(
            "Received '{name}' ({} bytes, file name {:?})",
            file.bytes.len(),
            file.file_name
        );
        if name == RESUME_FIELD {
            uploads.resume = Some(file);
        } else {
            uploads.job_description = Some(file);
        }
    }

    Ok(uploads)
}
