//! Renders issue lists into Slack mrkdwn message blocks.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::Issue;

/// Title + count + up to `display_max` issue blocks. The count always
/// reflects the full list; only the rendered blocks are capped.
pub fn format_message(
    title: &str,
    issues: &[Issue],
    display_max: usize,
    separator: &str,
) -> String {
    let mut lines = vec![format!("*{title}*"), format!("*Total Count: {}*", issues.len())];

    if issues.len() > display_max {
        lines.push(format!("Display details up to {display_max}."));
    }

    let blocks: Vec<String> = issues
        .iter()
        .take(display_max)
        .map(|issue| issue_block(issue, separator))
        .collect();
    if !blocks.is_empty() {
        lines.push(blocks.join("\n"));
    }

    lines.join("\n")
}

/// One fenced per-issue block. Empty fields are dropped, not rendered blank.
fn issue_block(issue: &Issue, separator: &str) -> String {
    let assignees = issue
        .assignees
        .nodes
        .iter()
        .map(|assignee| assignee.handle())
        .collect::<Vec<_>>()
        .join(separator);
    let labels = issue
        .labels
        .nodes
        .iter()
        .map(|label| label.name.clone())
        .collect::<Vec<_>>()
        .join(separator);

    let mut lines = vec![
        "```".to_string(),
        format!("<{}|{}>", issue.url, issue.title),
    ];
    if let Some(author) = &issue.author {
        lines.push(format!("Author: {}", author.handle()));
    }
    if !assignees.is_empty() {
        lines.push(format!("Assignees: {assignees}"));
    }
    if !labels.is_empty() {
        lines.push(format!("Labels: {labels}"));
    }
    lines.push(format!("CreatedAt: {}", timestamp(issue.created_at)));
    lines.push("```".to_string());

    lines.join("\n")
}

/// Header sent before the category messages: repository link + open total.
pub fn header_message(owner: &str, repo: &str, total_open: u32) -> String {
    let repository = format!("{owner}/{repo}");
    [
        "*GitHub issue report.*\n".to_string(),
        format!("*Target repository:* <https://github.com/{repository}|{repository}>"),
        format!(
            "*Total open issue: <https://github.com/{repository}/issues?q=is%3Aopen+is%3Aissue|{total_open}>*"
        ),
    ]
    .join("\n")
}

fn timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Actor, IssueState, Label, NodeList};
    use chrono::TimeZone;

    fn issue(title: &str, assignees: &[&str], labels: &[&str]) -> Issue {
        Issue {
            title: title.to_string(),
            url: format!("https://github.com/o/r/issues/{title}"),
            state: IssueState::Open,
            published_at: None,
            last_edited_at: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap(),
            closed_at: None,
            author: Some(Actor {
                resource_path: "/octocat".to_string(),
            }),
            assignees: NodeList {
                nodes: assignees
                    .iter()
                    .map(|login| Actor {
                        resource_path: format!("/{login}"),
                    })
                    .collect(),
            },
            labels: NodeList {
                nodes: labels
                    .iter()
                    .map(|name| Label {
                        name: name.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn total_count_matches_input_length_regardless_of_cap() {
        let issues: Vec<Issue> = (0..7).map(|i| issue(&format!("i{i}"), &[], &[])).collect();
        let message = format_message("Title", &issues, 3, " ");
        assert!(message.contains("*Total Count: 7*"));
    }

    #[test]
    fn truncation_notice_only_when_over_cap() {
        let issues: Vec<Issue> = (0..7).map(|i| issue(&format!("i{i}"), &[], &[])).collect();

        let over = format_message("T", &issues, 3, " ");
        assert!(over.contains("Display details up to 3."));
        // Only the first 3 blocks are rendered
        assert!(over.contains("|i2>"));
        assert!(!over.contains("|i3>"));

        let under = format_message("T", &issues, 50, " ");
        assert!(!under.contains("Display details up to"));

        let empty = format_message("T", &[], 3, " ");
        assert!(!empty.contains("Display details up to"));
        assert!(empty.contains("*Total Count: 0*"));
    }

    #[test]
    fn empty_fields_are_omitted_entirely() {
        let bare = issue("bare", &[], &[]);
        let message = format_message("T", &[bare], 50, " ");
        assert!(!message.contains("Assignees:"));
        assert!(!message.contains("Labels:"));
        assert!(message.contains("Author: @octocat"));
        assert!(message.contains("CreatedAt: 2026-01-02T03:04:05Z"));
    }

    #[test]
    fn author_line_is_omitted_for_deleted_accounts() {
        let mut ghost = issue("ghost", &[], &[]);
        ghost.author = None;
        let message = format_message("T", &[ghost], 50, " ");
        assert!(!message.contains("Author:"));
        assert!(message.contains("<https://github.com/o/r/issues/ghost|ghost>"));
    }

    #[test]
    fn assignees_and_labels_use_the_configured_separator() {
        let full = issue("full", &["alice", "bob"], &["bug", "docs"]);
        let message = format_message("T", &[full], 50, " ");
        assert!(message.contains("Assignees: @alice @bob"));
        assert!(message.contains("Labels: bug docs"));

        let full = issue("full", &["alice", "bob"], &["bug", "docs"]);
        let message = format_message("T", &[full], 50, ", ");
        assert!(message.contains("Assignees: @alice, @bob"));
        assert!(message.contains("Labels: bug, docs"));
    }

    #[test]
    fn blocks_are_fenced_and_linked() {
        let one = issue("one", &[], &[]);
        let message = format_message("My Title", &[one], 50, " ");
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "*My Title*");
        assert_eq!(lines[1], "*Total Count: 1*");
        assert_eq!(lines[2], "```");
        assert_eq!(lines[3], "<https://github.com/o/r/issues/one|one>");
    }

    #[test]
    fn header_links_repository_and_open_issue_count() {
        let header = header_message("rust-lang", "rust", 1234);
        assert!(header.contains("*GitHub issue report.*"));
        assert!(header
            .contains("<https://github.com/rust-lang/rust|rust-lang/rust>"));
        assert!(header.contains(
            "<https://github.com/rust-lang/rust/issues?q=is%3Aopen+is%3Aissue|1234>"
        ));
    }
}
