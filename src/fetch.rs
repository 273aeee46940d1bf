//! Cursor-following fetch loop over the issues connection.

use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::{ReporterError, Result};
use crate::query::{QueryArgs, FETCH_ISSUES_QUERY};
use crate::responses::{IssueConnection, RepositoryData};
use crate::types::Issue;

/// Whether a fetch follows the cursor chain or stops after one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    SinglePage,
    AllPages,
}

/// Issues accumulated across one pagination chain.
#[derive(Debug, Default)]
pub struct IssueBatch {
    /// Connection-wide match count, taken from the first page.
    pub total_count: u32,
    pub nodes: Vec<Issue>,
}

/// Fetch one page, degrading API-level failures to the empty connection.
///
/// GraphQL errors and a missing repository are logged and yield an empty
/// page; transport failures and non-2xx responses propagate.
async fn fetch_page(
    client: &GitHubClient,
    config: &Config,
    args: &QueryArgs,
) -> Result<IssueConnection> {
    let variables = args.variables(&config.github.owner, &config.github.repo);

    let data: RepositoryData =
        match client.query(FETCH_ISSUES_QUERY, Some(variables)).await {
            Ok(data) => data,
            Err(ReporterError::GraphQL { messages }) => {
                warn!(?messages, "GraphQL errors, treating fetch as empty");
                return Ok(IssueConnection::default());
            }
            Err(e) => return Err(e),
        };

    match data.repository {
        Some(repository) => Ok(repository.issues),
        None => {
            warn!(
                owner = %config.github.owner,
                repo = %config.github.repo,
                "repository missing from response, treating fetch as empty"
            );
            Ok(IssueConnection::default())
        }
    }
}

/// Assemble issues for `args`, following cursors in `AllPages` mode.
///
/// Pages arrive in the requested order and are appended as-is, so the batch
/// preserves the `orderBy` of the query. The loop stops at the configured
/// page bound rather than chasing a pathological repository forever.
pub async fn fetch_issues(
    client: &GitHubClient,
    config: &Config,
    mut args: QueryArgs,
    mode: FetchMode,
) -> Result<IssueBatch> {
    let mut batch = IssueBatch::default();
    let mut pages_fetched: u32 = 0;

    loop {
        let page = fetch_page(client, config, &args).await?;
        pages_fetched += 1;

        if pages_fetched == 1 {
            batch.total_count = page.total_count;
        }
        debug!(
            page = pages_fetched,
            nodes = page.nodes.len(),
            has_next = page.page_info.has_next_page,
            "fetched issue page"
        );
        batch.nodes.extend(page.nodes);

        if mode == FetchMode::SinglePage || !page.page_info.has_next_page {
            break;
        }
        if pages_fetched >= config.report.max_pages {
            warn!(
                max_pages = config.report.max_pages,
                fetched = batch.nodes.len(),
                "page bound reached, reporting on issues gathered so far"
            );
            break;
        }
        match page.page_info.end_cursor {
            Some(cursor) => args.cursor = Some(cursor),
            // hasNextPage without a cursor: nothing to continue from
            None => break,
        }
    }

    Ok(batch)
}
