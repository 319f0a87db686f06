use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use gitgrade::enums::model_error::ModelError;
use gitgrade::structs::model_info::ModelInfo;
use gitgrade::traits::ai_provider::AiProvider;

/// Provider that records prompts and replies with a canned completion.
pub struct StubProvider {
    completion: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    fn model_name(&self) -> String {
        "stub-model".to_string()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.completion.clone())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelError> {
        Ok(vec![ModelInfo { name: "models/stub-model".to_string(), display_name: None }])
    }
}
