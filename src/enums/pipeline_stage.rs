use std::fmt;
use serde::Serialize;

/// Step of the grading pipeline an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Configuration,
    Fetch,
    Model,
    Render,
}

impl PipelineStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Fetch => "repository fetch",
            Self::Model => "model analysis",
            Self::Render => "rendering",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
