//! Terminal rendering for dry runs.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::types::Issue;

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Assignees")]
    assignees: String,
    #[tabled(rename = "Labels")]
    labels: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            title: truncate(&issue.title, 50),
            author: issue
                .author
                .as_ref()
                .map(|a| a.handle())
                .unwrap_or_default(),
            assignees: issue
                .assignees
                .nodes
                .iter()
                .map(|a| a.handle())
                .collect::<Vec<_>>()
                .join(" "),
            labels: issue
                .labels
                .nodes
                .iter()
                .map(|l| l.name.clone())
                .collect::<Vec<_>>()
                .join(" "),
            created: issue.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Print one report category as a table, count accented.
pub fn print_category(title: &str, issues: &[Issue]) {
    println!();
    println!(
        "{} {}",
        title.bold(),
        format!("({})", issues.len()).green().bold()
    );
    if issues.is_empty() {
        println!("{}", "none".bright_black());
        return;
    }
    let rows: Vec<IssueRow> = issues.iter().map(IssueRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}
