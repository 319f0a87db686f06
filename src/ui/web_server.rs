use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::SERVER_PORT_SEARCH_SPAN;
use crate::enums::fetch_error::FetchError;
use crate::enums::model_error::ModelError;
use crate::errors::{GitGradeError, GitGradeResult};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_pipeline::AnalysisPipeline;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;
use crate::structs::config::model_config::ModelConfig;
use crate::traits::ai_provider::AiProvider;

const API_KEY_HEADER: &str = "x-gemini-api-key";
const MAX_BODY_BYTES: u64 = 16 * 1024;
const SHUTDOWN_GRACE_MILLIS: u64 = 100;

/// Local web UI. Only the configuration is shared between requests.
pub struct WebServer {
    config: Arc<Config>,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl WebServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn url(&self) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{}", port))
    }

    /// Binds the first free port at or above `preferred_port` and serves in the background.
    pub async fn start(&mut self, preferred_port: u16) -> GitGradeResult<u16> {
        let port = Self::find_available_port(preferred_port).await?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound, server) = warp::serve(routes(Arc::clone(&self.config)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| GitGradeError::server_error("bind", &e.to_string()))?;

        tokio::spawn(server);

        self.shutdown_tx = Some(shutdown_tx);
        self.port = Some(bound.port());
        log::info!("🌐 Web UI started on http://{}", bound);
        Ok(bound.port())
    }

    pub async fn shutdown(&mut self) -> GitGradeResult<()> {
        log::info!("🛑 Shutting down web UI...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| GitGradeError::server_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(std::time::Duration::from_millis(SHUTDOWN_GRACE_MILLIS)).await;
        self.port = None;
        log::info!("✅ Web UI shutdown complete");
        Ok(())
    }

    async fn find_available_port(preferred_port: u16) -> GitGradeResult<u16> {
        let last = preferred_port.saturating_add(SERVER_PORT_SEARCH_SPAN);
        for port in preferred_port..last {
            if let Ok(listener) = tokio::net::TcpListener::bind(("127.0.0.1", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(GitGradeError::server_error(
            "port selection",
            &format!("no free port between {} and {}", preferred_port, last),
        ))
    }
}

/// All HTTP routes of the web UI.
pub fn routes(config: Arc<Config>) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let config_filter = warp::any().map(move || Arc::clone(&config));

    let index = warp::path::end()
        .and(warp::get())
        .and(config_filter.clone())
        .and_then(serve_index);

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(analyze_handler);

    let models = warp::path!("api" / "models")
        .and(warp::get())
        .and(warp::header::optional::<String>(API_KEY_HEADER))
        .and(config_filter)
        .and_then(models_handler);

    index
        .or(analyze)
        .or(models)
        .with(warp::log("gitgrade::web"))
}

async fn serve_index(config: Arc<Config>) -> Result<impl warp::Reply, Infallible> {
    let html = include_str!("static/index.html")
        .replace("{{DEFAULT_MODEL}}", &escape_html(&config.ai.model));

    Ok(warp::reply::html(html))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

async fn analyze_handler(request: AnalyzeRequest, config: Arc<Config>) -> Result<WithStatus<Json>, Infallible> {
    let run_id = Uuid::new_v4();
    log::info!("🔍 [{}] Analysis requested for {}", run_id, request.url.trim());

    match run_analysis(&request, &config).await {
        Ok(report) => {
            log::info!("✅ [{}] {} graded with {}", run_id, report.repository, report.model);
            Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK))
        }
        Err(e) => {
            log::warn!("⚠️ [{}] {} failed: {}", run_id, e.stage(), e.technical_details());
            Ok(error_reply(&e))
        }
    }
}

async fn run_analysis(request: &AnalyzeRequest, config: &Config) -> GitGradeResult<AnalysisReport> {
    let api_key = resolve_api_key(request.api_key(), config)?;
    let github_token = request
        .github_token()
        .or_else(|| ConfigManager::read_secret(&config.github.token_env));

    AnalysisPipeline::from_config(config, github_token, api_key, request.model())
        .run(&request.url)
        .await
}

async fn models_handler(api_key: Option<String>, config: Arc<Config>) -> Result<WithStatus<Json>, Infallible> {
    let api_key = match resolve_api_key(api_key, &config) {
        Ok(key) => key,
        Err(e) => return Ok(error_reply(&e)),
    };

    let provider = GeminiProvider::new(ModelConfig::from_ai_config(&config.ai, api_key));
    match provider.list_models().await {
        Ok(models) => {
            let preferred = GeminiProvider::preferred_model(&models).map(|model| model.short_name().to_string());
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "models": models, "preferred": preferred })),
                StatusCode::OK,
            ))
        }
        Err(e) => Ok(error_reply(&GitGradeError::from(e))),
    }
}

fn resolve_api_key(supplied: Option<String>, config: &Config) -> GitGradeResult<String> {
    supplied
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .or_else(|| ConfigManager::read_secret(&config.ai.api_key_env))
        .ok_or_else(|| {
            GitGradeError::config_error(
                "A Gemini API key is required",
                Some("api_key"),
                Some(&format!("Enter a key in the form or set {}", config.ai.api_key_env)),
            )
        })
}

/// `{ "stage", "error" }` with a status matching the failure.
fn error_reply(error: &GitGradeError) -> WithStatus<Json> {
    let status = match error {
        GitGradeError::ConfigurationError { .. } | GitGradeError::Fetch(FetchError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
        GitGradeError::Fetch(FetchError::RepoNotFound { .. }) => StatusCode::NOT_FOUND,
        GitGradeError::Fetch(FetchError::RateLimited(_)) | GitGradeError::Model(ModelError::QuotaExceeded(_)) => {
            StatusCode::TOO_MANY_REQUESTS
        }
        GitGradeError::ServerError { .. } | GitGradeError::SystemError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        GitGradeError::Fetch(_) | GitGradeError::Model(_) => StatusCode::BAD_GATEWAY,
    };

    warp::reply::with_status(
        warp::reply::json(&json!({ "stage": error.stage(), "error": error.user_message() })),
        status,
    )
}
