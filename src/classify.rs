//! Pure filters splitting a fetched issue set into report categories.

use chrono::{DateTime, Duration, Utc};

use crate::types::Issue;

/// True when `date` falls within the last `days` days of `now`.
pub fn in_days(date: DateTime<Utc>, days: i64, now: DateTime<Utc>) -> bool {
    now - Duration::days(days) <= date
}

/// Issues with nobody assigned, order preserved.
pub fn unassigned(issues: &[Issue]) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| issue.assignees.nodes.is_empty())
        .cloned()
        .collect()
}

/// Open issues created before the threshold window, order preserved.
pub fn stale_open(issues: &[Issue], days: i64, now: DateTime<Utc>) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| !in_days(issue.created_at, days, now))
        .cloned()
        .collect()
}

/// Issues closed within the threshold window, order preserved. An issue
/// without a close timestamp never qualifies.
pub fn recently_closed(issues: &[Issue], days: i64, now: DateTime<Utc>) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| {
            issue
                .closed_at
                .is_some_and(|closed_at| in_days(closed_at, days, now))
        })
        .cloned()
        .collect()
}
