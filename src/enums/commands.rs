use clap::Subcommand;
use crate::config::constants::{GEMINI_API_KEY_ENV, GITHUB_TOKEN_ENV};
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file to ~/.gitgrade/config.toml
    Init,
    /// Grade a GitHub repository and print the report
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/project
        url: String,
        #[clap(long, env = GITHUB_TOKEN_ENV, hide_env_values = true)]
        github_token: Option<String>,
        #[clap(long, env = GEMINI_API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,
        #[clap(short, long)]
        model: Option<String>,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the grading prompt for a repository without calling the model
    Prompt {
        url: String,
        #[clap(long, env = GITHUB_TOKEN_ENV, hide_env_values = true)]
        github_token: Option<String>,
    },
    /// List models that support content generation
    Models {
        #[clap(long, env = GEMINI_API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Start the interactive grading page
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
    },
}
