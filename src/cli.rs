use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "issue-reporter")]
#[command(about = "Posts GitHub issue reports to a Slack channel", version)]
#[command(after_help = "EXAMPLES:
    issue-reporter report             Fetch, classify and post the report
    issue-reporter report --dry-run   Print the report instead of posting
    issue-reporter test-message       Verify webhook connectivity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show error source chain on failure
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch issues, classify them and post the four report messages
    #[command(after_help = "EXAMPLES:
    issue-reporter report
    issue-reporter report --dry-run")]
    Report(ReportArgs),
    /// Post a fixed test message to verify webhook connectivity
    #[command(after_help = "EXAMPLES:
    issue-reporter test-message")]
    TestMessage,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    issue-reporter completions bash > ~/.bash_completion.d/issue-reporter
    issue-reporter completions zsh > ~/.zfunc/_issue-reporter")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Clone, Copy, Default)]
pub struct ReportArgs {
    /// Render the report to stdout without posting to the webhook
    #[arg(long)]
    pub dry_run: bool,
}
