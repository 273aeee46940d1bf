use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use issue_reporter::cli::{Cli, Commands};
use issue_reporter::client::GitHubClient;
use issue_reporter::commands;
use issue_reporter::config::Config;
use issue_reporter::error::Result;
use issue_reporter::slack::SlackNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Completions need no config
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "issue-reporter", &mut io::stdout());
        }
        Commands::Report(args) => {
            let config = Config::load()?;
            let client = GitHubClient::new(config.github_token()?);
            let notifier = SlackNotifier::from_config(&config)?;
            commands::report::run(&client, &notifier, &config, args).await?;
        }
        Commands::TestMessage => {
            let config = Config::load()?;
            let notifier = SlackNotifier::from_config(&config)?;
            commands::test_message::run(&notifier).await?;
        }
    }

    Ok(())
}
