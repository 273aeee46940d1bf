use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use issue_reporter::config::Config;

/// Minimal runnable config pointing the webhook at a mock server.
pub fn config_with(webhook_url: &str, report_section: &str) -> Config {
    let raw = format!(
        r##"
        [github]
        owner = "rust-lang"
        repo = "rust"
        token = "test-token"

        [slack]
        webhook_url = "{webhook_url}"
        channel = "#dev"

        [report]
        {report_section}
        "##
    );
    toml::from_str(&raw).unwrap()
}

/// One issue node in API response shape.
pub fn issue_node(
    title: &str,
    state: &str,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
    assignees: &[&str],
    labels: &[&str],
) -> Value {
    json!({
        "title": title,
        "url": format!("https://github.com/rust-lang/rust/issues/{title}"),
        "state": state,
        "publishedAt": created_at.to_rfc3339(),
        "lastEditedAt": null,
        "createdAt": created_at.to_rfc3339(),
        "updatedAt": closed_at.unwrap_or(created_at).to_rfc3339(),
        "closedAt": closed_at.map(|date| date.to_rfc3339()),
        "author": { "resourcePath": "/octocat" },
        "assignees": {
            "nodes": assignees
                .iter()
                .map(|login| json!({ "resourcePath": format!("/{login}") }))
                .collect::<Vec<_>>()
        },
        "labels": {
            "nodes": labels
                .iter()
                .map(|name| json!({ "name": name }))
                .collect::<Vec<_>>()
        }
    })
}

/// A full GraphQL response carrying one page of the issues connection.
pub fn page(
    total_count: u32,
    nodes: Vec<Value>,
    end_cursor: Option<&str>,
    has_next_page: bool,
) -> Value {
    json!({
        "data": {
            "repository": {
                "issues": {
                    "totalCount": total_count,
                    "pageInfo": {
                        "endCursor": end_cursor,
                        "hasNextPage": has_next_page
                    },
                    "nodes": nodes
                }
            }
        }
    })
}
