use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "gitgrade")]
#[clap(about = "AI-powered GitHub repository grader", version, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
