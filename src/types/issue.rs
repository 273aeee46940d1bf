use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one tracked issue as returned by the GraphQL API.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub title: String,
    pub url: String,
    pub state: IssueState,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(rename = "lastEditedAt")]
    pub last_edited_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "closedAt")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Absent when the authoring account was deleted.
    pub author: Option<Actor>,
    pub assignees: NodeList<Actor>,
    pub labels: NodeList<Label>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "OPEN",
            IssueState::Closed => "CLOSED",
        }
    }
}

/// A user reference; `resourcePath` is the login prefixed with a slash.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Actor {
    #[serde(rename = "resourcePath")]
    pub resource_path: String,
}

impl Actor {
    /// Mention handle, e.g. "/octocat" -> "@octocat".
    pub fn handle(&self) -> String {
        format!("@{}", self.resource_path.trim_start_matches('/'))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Label {
    pub name: String,
}

/// Nested connection carrying only its nodes (assignees, labels).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NodeList<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}
