/// The four report sections, in the order the model is asked to emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisSection {
    Score,
    CriticalInsights,
    Summary,
    Roadmap,
}

impl AnalysisSection {
    pub const ALL: [Self; 4] = [Self::Score, Self::CriticalInsights, Self::Summary, Self::Roadmap];

    /// Header text without markdown decoration.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Score => "SCORE",
            Self::CriticalInsights => "CRITICAL INSIGHTS",
            Self::Summary => "SUMMARY",
            Self::Roadmap => "ROADMAP",
        }
    }

    /// Literal marker line the prompt asks the model to write.
    pub fn marker(&self) -> String {
        format!("### {}", self.title())
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Score => "🎯",
            Self::CriticalInsights => "🚨",
            Self::Summary => "📝",
            Self::Roadmap => "🗺️",
        }
    }
}
