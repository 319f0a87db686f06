pub mod ai;
pub mod analysis_prompt;
pub mod analysis_report;
pub mod analysis_result;
pub mod analyze_request;
pub mod best_practices;
pub mod cli;
pub mod config;
pub mod github;
pub mod model_info;
pub mod repository_metadata;
pub mod repository_ref;
pub mod repository_snapshot;
