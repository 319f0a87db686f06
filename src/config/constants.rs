use std::time::Duration;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_USER_AGENT: &str = concat!("gitgrade/", env!("CARGO_PKG_VERSION"));

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";
pub const MODEL_OVERRIDE_ENV: &str = "GITGRADE_MODEL";

pub const CONFIG_DIR_NAME: &str = ".gitgrade";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Upper bound on tree entries carried into the prompt.
pub const MAX_TREE_ENTRIES: usize = 100;

/// Exact, case-sensitive manifest names, in the order they appear in the prompt.
pub const RECOGNIZED_DEPENDENCY_FILES: &[&str] = &[
    "requirements.txt",
    "package.json",
    "package-lock.json",
    "Pipfile",
    "Pipfile.lock",
    "pyproject.toml",
];

pub const LOCK_FILES: &[&str] = &["package-lock.json", "Pipfile.lock"];

/// Preferred models, most preferred first.
pub const PREFERRED_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-1.5-flash"];

pub const DEFAULT_SERVER_PORT: u16 = 8501;
pub const SERVER_PORT_SEARCH_SPAN: u16 = 100;
pub const SPINNER_FRAME_MILLIS: u64 = 120;

pub fn spinner_interval() -> Duration {
    Duration::from_millis(SPINNER_FRAME_MILLIS)
}
