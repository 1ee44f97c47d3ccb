use std::sync::Arc;

use crate::analysis::advisor::Advisor;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub advisor: Arc<Advisor>,
}
