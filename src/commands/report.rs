//! The report run: fetch, classify, format, post.

use chrono::Utc;
use tracing::info;

use crate::cli::ReportArgs;
use crate::classify;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{fetch_issues, FetchMode};
use crate::format::{format_message, header_message};
use crate::output;
use crate::query::QueryArgs;
use crate::slack::SlackNotifier;

pub async fn run(
    client: &GitHubClient,
    notifier: &SlackNotifier,
    config: &Config,
    args: ReportArgs,
) -> Result<()> {
    // Open issues oldest-first across all pages; closed issues use only
    // the most-recently-updated page.
    let open = fetch_issues(client, config, QueryArgs::open_issues(), FetchMode::AllPages).await?;
    let closed =
        fetch_issues(client, config, QueryArgs::closed_issues(), FetchMode::SinglePage).await?;
    info!(
        open = open.nodes.len(),
        total_open = open.total_count,
        closed = closed.nodes.len(),
        "fetched issues"
    );

    let now = Utc::now();
    let report = &config.report;
    let unassigned = classify::unassigned(&open.nodes);
    let stale = classify::stale_open(&open.nodes, report.old_issue_days, now);
    let recent = classify::recently_closed(&closed.nodes, report.recent_closed_issue_days, now);

    let unassigned_title = ":thinking_face:Issues no one assigned.".to_string();
    let stale_title = format!(
        ":tired_face:Issues have not been solved more than {} days.",
        report.old_issue_days
    );
    let recent_title = format!(
        ":+1:Issues have been closed within {} days.",
        report.recent_closed_issue_days
    );

    if args.dry_run {
        println!(
            "Repository: https://github.com/{}/{}",
            config.github.owner, config.github.repo
        );
        println!("Total open issues: {}", open.total_count);
        output::print_category(&unassigned_title, &unassigned);
        output::print_category(&stale_title, &stale);
        output::print_category(&recent_title, &recent);
        return Ok(());
    }

    let messages = [
        header_message(&config.github.owner, &config.github.repo, open.total_count),
        format_message(
            &unassigned_title,
            &unassigned,
            report.display_issue_max,
            &report.separator,
        ),
        format_message(
            &stale_title,
            &stale,
            report.display_issue_max,
            &report.separator,
        ),
        format_message(
            &recent_title,
            &recent,
            report.display_issue_max,
            &report.separator,
        ),
    ];

    for message in &messages {
        notifier.post(message).await?;
    }
    info!("posted report");

    Ok(())
}
