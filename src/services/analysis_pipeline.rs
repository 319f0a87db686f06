use std::sync::Arc;
use chrono::Utc;
use crate::errors::GitGradeResult;
use crate::helpers::prompt_generator;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_parser::AnalysisParser;
use crate::services::github_fetcher::GithubFetcher;
use crate::structs::analysis_prompt::AnalysisPrompt;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::config::config::Config;
use crate::structs::config::model_config::ModelConfig;
use crate::structs::repository_snapshot::RepositorySnapshot;
use crate::traits::ai_provider::AiProvider;

/// Fetch, prompt, model call and section split for one repository URL.
pub struct AnalysisPipeline {
    fetcher: GithubFetcher,
    ai_provider: Arc<dyn AiProvider>,
}

impl AnalysisPipeline {
    pub fn new(fetcher: GithubFetcher, ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { fetcher, ai_provider }
    }

    /// Wires the GitHub fetcher and the Gemini provider from configuration plus per-run credentials.
    pub fn from_config(config: &Config, github_token: Option<String>, api_key: String, model: Option<String>) -> Self {
        let fetcher = GithubFetcher::new(&config.github.api_url, github_token)
            .with_user_agent(&config.github.user_agent);
        let provider = GeminiProvider::new(ModelConfig::from_ai_config(&config.ai, api_key).with_model(model));

        Self::new(fetcher, Arc::new(provider))
    }

    pub fn model_name(&self) -> String {
        self.ai_provider.model_name()
    }

    pub async fn fetch_snapshot(&self, url: &str) -> GitGradeResult<RepositorySnapshot> {
        let snapshot = self.fetcher.fetch_url(url).await?;
        Ok(snapshot)
    }

    /// Fetches the repository and returns the prompt without calling the model.
    pub async fn build_prompt(&self, url: &str) -> GitGradeResult<(RepositorySnapshot, AnalysisPrompt)> {
        let snapshot = self.fetch_snapshot(url).await?;
        let prompt = prompt_generator::generate_prompt(&snapshot);
        log::debug!("Prompt for {}: {} bytes", snapshot.repository, prompt.as_str().len());
        Ok((snapshot, prompt))
    }

    /// A fetch failure stops the run before the model is called.
    pub async fn run(&self, url: &str) -> GitGradeResult<AnalysisReport> {
        let (snapshot, prompt) = self.build_prompt(url).await?;
        self.analyze(snapshot, &prompt).await
    }

    pub async fn analyze(&self, snapshot: RepositorySnapshot, prompt: &AnalysisPrompt) -> GitGradeResult<AnalysisReport> {
        let completion = self.ai_provider.generate(prompt.as_str()).await?;
        let result = AnalysisParser::split(&completion);

        if !result.has_sections() {
            log::warn!("⚠️ Completion for {} carried no section markers; showing raw text", snapshot.repository);
        }

        Ok(AnalysisReport {
            repository: snapshot.repository,
            description: snapshot.metadata.description,
            stars: snapshot.metadata.stars,
            language: snapshot.metadata.language,
            model: self.ai_provider.model_name(),
            generated_at: Utc::now(),
            result,
        })
    }
}
