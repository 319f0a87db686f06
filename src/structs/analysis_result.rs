use serde::Serialize;
use crate::enums::analysis_section::AnalysisSection;

/// Model completion plus the four sections split out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub raw: String,
    pub score: String,
    pub critical_insights: String,
    pub summary: String,
    pub roadmap: String,
    /// Numeric grade found in the score section, if any.
    pub score_value: Option<u8>,
}

impl AnalysisResult {
    pub fn section(&self, section: AnalysisSection) -> &str {
        match section {
            AnalysisSection::Score => &self.score,
            AnalysisSection::CriticalInsights => &self.critical_insights,
            AnalysisSection::Summary => &self.summary,
            AnalysisSection::Roadmap => &self.roadmap,
        }
    }

    pub fn section_mut(&mut self, section: AnalysisSection) -> &mut String {
        match section {
            AnalysisSection::Score => &mut self.score,
            AnalysisSection::CriticalInsights => &mut self.critical_insights,
            AnalysisSection::Summary => &mut self.summary,
            AnalysisSection::Roadmap => &mut self.roadmap,
        }
    }

    /// False when the completion carried none of the markers; callers then show `raw`.
    pub fn has_sections(&self) -> bool {
        AnalysisSection::ALL.iter().any(|section| !self.section(*section).is_empty())
    }
}
