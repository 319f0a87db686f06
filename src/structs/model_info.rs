use serde::Serialize;

/// A generation model offered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Full resource name, e.g. `models/gemini-2.5-flash`.
    pub name: String,
    pub display_name: Option<String>,
}

impl ModelInfo {
    /// Name without the `models/` prefix.
    pub fn short_name(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }
}
