use crate::config::constants::{
    DEFAULT_GEMINI_API_URL, DEFAULT_GITHUB_API_URL, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT,
    GEMINI_API_KEY_ENV, GITHUB_TOKEN_ENV, PREFERRED_MODELS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        PREFERRED_MODELS[0].to_string()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_gemini_url() -> String {
        DEFAULT_GEMINI_API_URL.to_string()
    }

    pub fn default_temperature() -> f32 {
        0.4
    }

    pub fn default_max_output_tokens() -> u32 {
        8192
    }

    pub fn default_github_url() -> String {
        DEFAULT_GITHUB_API_URL.to_string()
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_server_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }
}
