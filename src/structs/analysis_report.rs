use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::repository_ref::RepositoryRef;

/// Everything the presentation layer needs to render one grading run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub repository: RepositoryRef,
    pub description: Option<String>,
    pub stars: u64,
    pub language: Option<String>,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub result: AnalysisResult,
}
