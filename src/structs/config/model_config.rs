use crate::structs::config::ai_config::AiConfig;

/// Everything a model provider needs, resolved once and passed in at construction.
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl ModelConfig {
    pub fn from_ai_config(ai: &AiConfig, api_key: String) -> Self {
        Self {
            api_key,
            model: ai.model.clone(),
            base_url: ai.base_url.clone(),
            temperature: ai.temperature,
            max_output_tokens: ai.max_output_tokens,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        self
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}
