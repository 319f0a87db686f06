use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::config::constants::PREFERRED_MODELS;
use crate::enums::model_error::ModelError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_model_list::GeminiModelList;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::{GeminiErrorBody, GeminiResponse};
use crate::structs::config::model_config::ModelConfig;
use crate::structs::model_info::ModelInfo;
use crate::traits::ai_provider::AiProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";
const GENERATE_CONTENT_METHOD: &str = "generateContent";
const MODEL_PAGE_SIZE: u32 = 1000;

#[derive(Clone)]
pub struct GeminiProvider {
    config: ModelConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn short_model(&self) -> &str {
        let model = self.config.model.trim();
        model.strip_prefix("models/").unwrap_or(model)
    }

    fn ensure_key(&self) -> Result<&str, ModelError> {
        let key = self.config.api_key.trim();
        if key.is_empty() {
            return Err(ModelError::AuthError("no API key provided".to_string()));
        }
        Ok(key)
    }

    fn get_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.config.temperature),
                max_output_tokens: Some(self.config.max_output_tokens),
                candidate_count: Some(1),
            }),
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ModelError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GeminiErrorBody>(&body)
            .map(|parsed| parsed.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        log::debug!("Gemini API error response ({}): {}", status, body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::AuthError(message),
            StatusCode::BAD_REQUEST if message.to_ascii_lowercase().contains("api key") => {
                ModelError::AuthError(message)
            }
            StatusCode::TOO_MANY_REQUESTS => ModelError::QuotaExceeded(message),
            _ => ModelError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Picks the first available entry of `PREFERRED_MODELS`, else the first model listed.
    pub fn preferred_model(models: &[ModelInfo]) -> Option<&ModelInfo> {
        PREFERRED_MODELS
            .iter()
            .find_map(|preferred| models.iter().find(|model| model.short_name() == *preferred))
            .or_else(|| models.first())
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {

    fn model_name(&self) -> String {
        self.short_model().to_string()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let key = self.ensure_key()?;
        let url = format!("{}/models/{}:{}", self.base_url(), self.short_model(), GENERATE_CONTENT_METHOD);

        log::info!("📦 Request model: {}", self.short_model());
        log::debug!("Prompt size: {} bytes", prompt.len());

        let response = self.client
            .post(&url)
            .header(API_KEY_HEADER, key)
            .json(&self.get_request(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        match body.text() {
            Some(text) => Ok(text),
            None => {
                let reason = body.prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                    .or_else(|| body.candidates.first().and_then(|c| c.finish_reason.clone()));
                if let Some(reason) = reason {
                    log::warn!("⚠️ Gemini returned no text (reason: {})", reason);
                }
                Err(ModelError::EmptyResponse)
            }
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelError> {
        let key = self.ensure_key()?;
        let url = format!("{}/models", self.base_url());
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client
                .get(&url)
                .header(API_KEY_HEADER, key)
                .query(&[("pageSize", MODEL_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(Self::error_from_response(response).await);
            }

            let page: GeminiModelList = response
                .json()
                .await
                .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

            models.extend(
                page.models
                    .into_iter()
                    .filter(|model| model.supported_generation_methods.iter().any(|m| m == GENERATE_CONTENT_METHOD))
                    .map(|model| ModelInfo {
                        name: model.name,
                        display_name: model.display_name,
                    }),
            );

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}
