use serde::Deserialize;

/// Body of `POST /api/analyze`. Credentials are per request and never stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(default)]
    pub github_token: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl AnalyzeRequest {
    pub fn github_token(&self) -> Option<String> {
        non_blank(self.github_token.as_deref())
    }

    pub fn api_key(&self) -> Option<String> {
        non_blank(self.api_key.as_deref())
    }

    pub fn model(&self) -> Option<String> {
        non_blank(self.model.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(ToString::to_string)
}
