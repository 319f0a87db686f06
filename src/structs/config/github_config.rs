use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    #[serde(default = "ConfigHelper::default_github_url")]
    pub api_url: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_github_url(),
            user_agent: ConfigHelper::default_user_agent(),
            token_env: ConfigHelper::default_token_env(),
        }
    }
}
