use std::sync::Arc;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use gitgrade::enums::fetch_error::FetchError;
use gitgrade::enums::pipeline_stage::PipelineStage;
use gitgrade::errors::GitGradeError;
use gitgrade::services::analysis_pipeline::AnalysisPipeline;
use gitgrade::services::github_fetcher::GithubFetcher;
use crate::common::StubProvider;

const GRADED: &str = "### SCORE\n58/100\n\n\
### CRITICAL INSIGHTS\n- express is pinned to \"*\" and there is no package-lock.json.\n\n\
### SUMMARY\nA small Express API with a helpful README.\n\n\
### ROADMAP\n1. Pin express to ^4.19.2\n2. Commit package-lock.json\n3. Add a test suite\n";

async fn mock_node_repository(server: &MockServer) {
    server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/api");
        then.status(200).json_body(json!({
            "full_name": "acme/api",
            "description": "Tiny Express API",
            "stargazers_count": 12,
            "language": "JavaScript",
            "default_branch": "main"
        }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/api/git/trees/main");
        then.status(200).json_body(json!({
            "tree": [
                {"path": "README.md", "type": "blob"},
                {"path": "index.js", "type": "blob"},
                {"path": "package.json", "type": "blob"}
            ],
            "truncated": false
        }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/api/contents/README.md");
        then.status(200).json_body(json!({"content": STANDARD.encode("# API\nRun with node index.js\n"), "encoding": "base64"}));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/api/contents/package.json");
        then.status(200).json_body(json!({
            "content": STANDARD.encode(r#"{"name":"api","dependencies":{"express":"*"}}"#),
            "encoding": "base64"
        }));
    }).await;
}

#[tokio::test]
async fn unpinned_manifest_without_lock_file_is_graded() {
    let server = MockServer::start_async().await;
    mock_node_repository(&server).await;
    let lock = server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/api/contents/package-lock.json");
        then.status(200);
    }).await;

    let provider = Arc::new(StubProvider::new(GRADED));
    let pipeline = AnalysisPipeline::new(GithubFetcher::new(&server.base_url(), None), provider.clone());

    let report = pipeline.run("https://github.com/acme/api").await.unwrap();

    assert_eq!(provider.calls(), 1);
    lock.assert_hits_async(0).await;

    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("Dependency Health (CRITICAL"));
    assert!(prompt.contains(r#"--- package.json ---
{"name":"api","dependencies":{"express":"*"}}"#));
    assert!(prompt.contains("--- package-lock.json --- not found (lock file)"));
    assert!(prompt.contains("# API\nRun with node index.js"));

    let result = &report.result;
    assert!(!result.score.is_empty());
    assert!(!result.critical_insights.is_empty());
    assert!(!result.summary.is_empty());
    assert!(!result.roadmap.is_empty());
    assert_eq!(result.score_value, Some(58));
    assert_eq!(report.model, "stub-model");
    assert_eq!(report.stars, 12);
}

#[tokio::test]
async fn missing_repository_never_reaches_the_model() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/repos/acme/ghost");
        then.status(404).json_body(json!({"message": "Not Found"}));
    }).await;

    let provider = Arc::new(StubProvider::new(GRADED));
    let pipeline = AnalysisPipeline::new(GithubFetcher::new(&server.base_url(), None), provider.clone());

    let err = pipeline.run("https://github.com/acme/ghost").await.unwrap_err();

    assert_eq!(provider.calls(), 0);
    assert_eq!(err.stage(), PipelineStage::Fetch);
    assert!(matches!(
        err,
        GitGradeError::Fetch(FetchError::RepoNotFound { ref owner, ref name }) if owner == "acme" && name == "ghost"
    ));
}

#[tokio::test]
async fn unstructured_completion_keeps_the_raw_text() {
    let server = MockServer::start_async().await;
    mock_node_repository(&server).await;

    let provider = Arc::new(StubProvider::new("I cannot grade this repository in the requested format."));
    let pipeline = AnalysisPipeline::new(GithubFetcher::new(&server.base_url(), None), provider);

    let report = pipeline.run("https://github.com/acme/api.git").await.unwrap();

    assert!(!report.result.has_sections());
    assert_eq!(report.result.raw, "I cannot grade this repository in the requested format.");
}
