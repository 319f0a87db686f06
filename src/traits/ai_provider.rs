use async_trait::async_trait;
use crate::enums::model_error::ModelError;
use crate::structs::model_info::ModelInfo;

/// A hosted text-generation model: one prompt in, one completion out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Model identifier used for the request, without the `models/` prefix.
    fn model_name(&self) -> String;

    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelError>;
}
