//! Builds the parameterized issue-fetch query.
//!
//! Owner, repo, cursor and ordering travel as GraphQL variables, never as
//! string fragments spliced into the document.

use serde_json::json;

use crate::types::IssueState;

/// Hard ceiling the GraphQL API puts on `first`.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const FETCH_ISSUES_QUERY: &str = r#"
query FetchIssues($owner: String!, $name: String!, $states: [IssueState!], $orderBy: IssueOrder, $limit: Int!, $cursor: String) {
    repository(owner: $owner, name: $name) {
        issues(first: $limit, states: $states, after: $cursor, orderBy: $orderBy) {
            totalCount
            pageInfo {
                endCursor
                hasNextPage
            }
            nodes {
                title
                url
                state
                publishedAt
                lastEditedAt
                createdAt
                updatedAt
                closedAt
                author {
                    resourcePath
                }
                assignees(first: 5) {
                    nodes {
                        resourcePath
                    }
                }
                labels(first: 5) {
                    nodes {
                        name
                    }
                }
            }
        }
    }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    CreatedAt,
    UpdatedAt,
}

impl OrderField {
    fn as_str(&self) -> &'static str {
        match self {
            OrderField::CreatedAt => "CREATED_AT",
            OrderField::UpdatedAt => "UPDATED_AT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IssueOrder {
    pub field: OrderField,
    pub direction: OrderDirection,
}

/// Arguments for one issue-fetch call. The paginator advances `cursor`
/// between pages; everything else stays fixed for the chain.
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub states: IssueState,
    pub order_by: IssueOrder,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl QueryArgs {
    /// Open issues, oldest first, full pages.
    pub fn open_issues() -> Self {
        Self {
            states: IssueState::Open,
            order_by: IssueOrder {
                field: OrderField::CreatedAt,
                direction: OrderDirection::Asc,
            },
            limit: MAX_PAGE_SIZE,
            cursor: None,
        }
    }

    /// Closed issues, most recently updated first.
    pub fn closed_issues() -> Self {
        Self {
            states: IssueState::Closed,
            order_by: IssueOrder {
                field: OrderField::UpdatedAt,
                direction: OrderDirection::Desc,
            },
            limit: MAX_PAGE_SIZE,
            cursor: None,
        }
    }

    pub fn variables(&self, owner: &str, name: &str) -> serde_json::Value {
        json!({
            "owner": owner,
            "name": name,
            "states": [self.states.as_str()],
            "orderBy": {
                "field": self.order_by.field.as_str(),
                "direction": self.order_by.direction.as_str(),
            },
            "limit": self.limit.min(MAX_PAGE_SIZE),
            "cursor": self.cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_issues_preset() {
        let args = QueryArgs::open_issues();
        assert_eq!(args.states, IssueState::Open);
        assert_eq!(args.order_by.field, OrderField::CreatedAt);
        assert_eq!(args.order_by.direction, OrderDirection::Asc);
        assert_eq!(args.limit, MAX_PAGE_SIZE);
        assert!(args.cursor.is_none());
    }

    #[test]
    fn variables_without_cursor_render_null() {
        let vars = QueryArgs::open_issues().variables("rust-lang", "rust");
        assert_eq!(vars["owner"], "rust-lang");
        assert_eq!(vars["name"], "rust");
        assert_eq!(vars["states"][0], "OPEN");
        assert_eq!(vars["orderBy"]["field"], "CREATED_AT");
        assert_eq!(vars["orderBy"]["direction"], "ASC");
        assert!(vars["cursor"].is_null());
    }

    #[test]
    fn variables_carry_cursor_when_set() {
        let mut args = QueryArgs::closed_issues();
        args.cursor = Some("abc123".to_string());
        let vars = args.variables("rust-lang", "rust");
        assert_eq!(vars["cursor"], "abc123");
        assert_eq!(vars["states"][0], "CLOSED");
        assert_eq!(vars["orderBy"]["field"], "UPDATED_AT");
        assert_eq!(vars["orderBy"]["direction"], "DESC");
    }

    #[test]
    fn limit_is_clamped_to_api_ceiling() {
        let mut args = QueryArgs::open_issues();
        args.limit = 500;
        let vars = args.variables("o", "r");
        assert_eq!(vars["limit"], 100);
    }

    #[test]
    fn owner_is_a_variable_not_a_document_fragment() {
        // A hostile owner string must never reach the query document
        let vars = QueryArgs::open_issues().variables("evil\") { x }", "r");
        assert_eq!(vars["owner"], "evil\") { x }");
        assert!(!FETCH_ISSUES_QUERY.contains("evil"));
    }
}
