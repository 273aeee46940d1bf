//! Shared GraphQL response types used across fetches.

use serde::Deserialize;

use crate::types::Issue;

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// One page of the repository's `issues` connection.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IssueConnection {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub nodes: Vec<Issue>,
}

/// Top-level `data` object; `repository` is absent when the repo
/// does not exist or the token cannot see it.
#[derive(Deserialize, Debug)]
pub struct RepositoryData {
    pub repository: Option<Repository>,
}

#[derive(Deserialize, Debug)]
pub struct Repository {
    pub issues: IssueConnection,
}
