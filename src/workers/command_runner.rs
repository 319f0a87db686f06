use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::enums::pipeline_stage::PipelineStage;
use crate::errors::{GitGradeError, GitGradeResult};
use crate::helpers::prompt_generator;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_logger::ReportLogger;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_pipeline::AnalysisPipeline;
use crate::services::github_fetcher::GithubFetcher;
use crate::structs::config::config::Config;
use crate::structs::config::model_config::ModelConfig;
use crate::traits::ai_provider::AiProvider;
use crate::ui::web_server::WebServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> GitGradeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { url, github_token, api_key, model, format } => {
                self.analyze_command(&url, github_token, api_key, model, format).await
            }
            Commands::Prompt { url, github_token } => self.prompt_command(&url, github_token).await,
            Commands::Models { api_key } => self.models_command(api_key).await,
            Commands::Serve { port, no_browser } => self.serve_command(port, no_browser).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> GitGradeResult<()> {
        log::info!("🚀 Initializing gitgrade configuration...");

        let path = ConfigManager::config_path().ok_or_else(|| {
            GitGradeError::system_error("init", "could not determine the home directory")
        })?;
        ConfigManager::create_sample_config(&path)?;

        log::info!("📝 Keys stay in the environment: export GEMINI_API_KEY (and optionally GITHUB_TOKEN).");
        Ok(())
    }

    async fn analyze_command(
        &self,
        url: &str,
        github_token: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        format: OutputFormat,
    ) -> GitGradeResult<()> {
        let config = ConfigManager::load()?;
        let api_key = Self::resolve_api_key(api_key, &config)?;
        let github_token = Self::resolve_github_token(github_token, &config);

        let pipeline = AnalysisPipeline::from_config(&config, github_token, api_key, model);
        log::info!("🔍 Grading {} with {}", url.trim(), pipeline.model_name());

        let (snapshot, prompt) = AnimatedLogger::track(
            PipelineStage::Fetch,
            "📥 Fetching repository",
            pipeline.build_prompt(url),
            |(snapshot, _)| format!("Fetched {} ({} files)", snapshot.repository, snapshot.total_files),
        ).await?;

        let report = AnimatedLogger::track(
            PipelineStage::Model,
            "🤖 Waiting for the model",
            pipeline.analyze(snapshot, &prompt),
            |_| "Analysis complete".to_string(),
        ).await?;

        ReportLogger::print_report(&report, format)
    }

    async fn prompt_command(&self, url: &str, github_token: Option<String>) -> GitGradeResult<()> {
        let config = ConfigManager::load()?;
        let fetcher = GithubFetcher::new(&config.github.api_url, Self::resolve_github_token(github_token, &config))
            .with_user_agent(&config.github.user_agent);

        let snapshot = fetcher.fetch_url(url).await?;
        println!("{}", prompt_generator::generate_prompt(&snapshot));
        Ok(())
    }

    async fn models_command(&self, api_key: Option<String>) -> GitGradeResult<()> {
        let config = ConfigManager::load()?;
        let api_key = Self::resolve_api_key(api_key, &config)?;
        let provider = GeminiProvider::new(ModelConfig::from_ai_config(&config.ai, api_key));

        let models = provider.list_models().await?;
        if models.is_empty() {
            log::warn!("⚠️ No models supporting generateContent are available for this key");
            return Ok(());
        }

        ReportLogger::print_models(&models, GeminiProvider::preferred_model(&models));
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>, no_browser: bool) -> GitGradeResult<()> {
        let config = ConfigManager::load()?;
        let open_browser = config.server.open_browser && !no_browser;
        let port = port.unwrap_or(config.server.port);

        let mut server = WebServer::new(config);
        server.start(port).await?;

        if let Some(url) = server.url() {
            if open_browser {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("⚠️ Could not open a browser: {}", e);
                }
            }
            log::info!("👉 Open {} to grade a repository. Press Ctrl+C to stop.", url);
        }

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| GitGradeError::system_error("signal handling", &e.to_string()))?;

        server.shutdown().await
    }

    fn resolve_api_key(cli_value: Option<String>, config: &Config) -> GitGradeResult<String> {
        cli_value
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .or_else(|| ConfigManager::read_secret(&config.ai.api_key_env))
            .ok_or_else(|| {
                GitGradeError::config_error(
                    "No Gemini API key provided",
                    Some("api_key"),
                    Some(&format!("Pass --api-key or export {}", config.ai.api_key_env)),
                )
            })
    }

    fn resolve_github_token(cli_value: Option<String>, config: &Config) -> Option<String> {
        cli_value
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .or_else(|| ConfigManager::read_secret(&config.github.token_env))
    }
}
