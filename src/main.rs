use clap::Parser;
use gitgrade::structs::cli::Cli;
use gitgrade::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        gitgrade::errors::ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
