use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::github_config::GithubConfig;
use crate::structs::config::server_config::ServerConfig;

/// Non-secret settings from `~/.gitgrade/config.toml`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub server: ServerConfig,
}
