pub mod ai_providers;
pub mod analysis_parser;
pub mod analysis_pipeline;
pub mod github_fetcher;
