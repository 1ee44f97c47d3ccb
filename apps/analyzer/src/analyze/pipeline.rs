//! Analyze pipeline — the fixed call sequence behind `POST /api/v1/analyze`.
//!
//! 1. resume is required and must be a PDF
//! 2. resume text must extract to something non-blank, otherwise stop
//! 3. job description (optional): PDF → extractor, anything else → UTF-8
//! 4. with a job description: match percentage + gap tokens
//! 5. static advice on the resume text, with or without a job description

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::advisor::Advisor;
use crate::analysis::compare;
use crate::analyze::upload::{AnalyzeUploads, UploadedFile};
use crate::errors::AppError;
use crate::extraction::{decode_plain_text, ensure_non_blank, TextExtractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    Pdf,
    Text,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub text: String,
    pub source: DocumentSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub resume_text: String,
    pub job_description: Option<JobDescription>,
    pub match_percentage: Option<f64>,
    pub missing_skills: Option<Vec<String>>,
    pub suggestions: Vec<String>,
}

pub async fn run_analysis(
    uploads: AnalyzeUploads,
    extractor: &dyn TextExtractor,
    advisor: &Advisor,
    gap_limit: usize,
) -> Result<AnalyzeResponse, AppError> {
    let analysis_id = Uuid::new_v4();

    let resume = uploads
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    if !resume.is_pdf() {
        return Err(AppError::Validation(
            "resume must be a PDF file".to_string(),
        ));
    }

    let resume_text = extractor
        .extract(resume.bytes)
        .await
        .and_then(ensure_non_blank)
        .map_err(AppError::ExtractionFailed)?;

    let job_description = match uploads.job_description {
        Some(file) => Some(read_job_description(file, extractor).await?),
        None => None,
    };

    let (match_percentage, missing_skills) = match &job_description {
        Some(jd) => {
            let report = compare(&resume_text, &jd.text, gap_limit);
            info!(
                "Analysis {analysis_id}: {} resume tokens, {} JD tokens, match {}%, {} gaps",
                report.resume_token_count,
                report.jd_token_count,
                report.match_percentage,
                report.missing_skills.len()
            );
            (Some(report.match_percentage), Some(report.missing_skills))
        }
        None => {
            info!("Analysis {analysis_id}: no job description, advice only");
            (None, None)
        }
    };

    let suggestions = advisor.advise(&resume_text);

    Ok(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        resume_text,
        job_description,
        match_percentage,
        missing_skills,
        suggestions,
    })
}

async fn read_job_description(
    file: UploadedFile,
    extractor: &dyn TextExtractor,
) -> Result<JobDescription, AppError> {
    if file.is_pdf() {
        let text = extractor.extract(file.bytes).await.map_err(|e| {
            warn!("Job description extraction failed: {e}");
            AppError::UnprocessableEntity(
                "Could not extract text from the job description PDF.".to_string(),
            )
        })?;
        return Ok(JobDescription {
            text,
            source: DocumentSource::Pdf,
        });
    }

    let text = decode_plain_text(file.bytes).map_err(|e| {
        AppError::Decode(format!("Job description is not valid UTF-8 text: {e}"))
    })?;
    Ok(JobDescription {
        text,
        source: DocumentSource::Text,
    })
}
