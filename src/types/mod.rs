mod issue;

pub use issue::{Actor, Issue, IssueState, Label, NodeList};
