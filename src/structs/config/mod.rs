pub mod ai_config;
pub mod config;
pub mod github_config;
pub mod model_config;
pub mod server_config;
