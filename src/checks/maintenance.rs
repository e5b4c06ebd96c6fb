use crate::checks::Verdict;
use crate::config::Config;
use crate::facts::HostingData;
use chrono::{DateTime, Duration, Utc};

/// Days in the approximated month used for the staleness window
const DAYS_PER_MONTH: i64 = 30;

/// Maintenance evaluation: recency and issue volume, judged independently
#[derive(Debug, Clone)]
pub struct MaintenanceOutcome {
    /// Pass when the last push is within the staleness window, or when the
    /// repository never reported a push date
    pub recency: Verdict,

    /// Pass under the applicable ceiling; Fail over the standard ceiling,
    /// Warn over the relaxed large-project ceiling
    pub issues: Verdict,

    /// Whole months since the last push, when known
    pub months_since_push: Option<i64>,

    pub open_issues: u64,

    /// The ceiling that was applied, for diagnostics
    pub issue_ceiling: u64,
}

/// Judge maintenance health from the repository snapshot.
///
/// Recency and issue volume are independent; either failing marks the
/// package. Large packages get the relaxed issue ceiling, and exceeding it
/// is a warning rather than a hard failure. Returns `None` when no
/// repository was resolved, in which case the criterion contributes no
/// failure.
#[must_use]
pub fn evaluate(hosting: Option<&HostingData>, large: bool, now: DateTime<Utc>, config: &Config) -> Option<MaintenanceOutcome> {
    let hosting = hosting?;

    let staleness_window = Duration::days(config.staleness_months * DAYS_PER_MONTH);
    let months_since_push = hosting.pushed_at.map(|pushed| (now - pushed).num_days() / DAYS_PER_MONTH);
    let recency = match hosting.pushed_at {
        Some(pushed) if now - pushed > staleness_window => Verdict::Fail,
        _ => Verdict::Pass,
    };

    let (issue_ceiling, excess) = if large {
        (config.large_max_open_issues, Verdict::Warn)
    } else {
        (config.max_open_issues, Verdict::Fail)
    };
    let issues = if hosting.open_issues > issue_ceiling { excess } else { Verdict::Pass };

    Some(MaintenanceOutcome {
        recency,
        issues,
        months_since_push,
        open_issues: hosting.open_issues,
        issue_ceiling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosting(months_since_push: Option<i64>, open_issues: u64, now: DateTime<Utc>) -> HostingData {
        HostingData {
            stars: 0,
            forks: 0,
            pushed_at: months_since_push.map(|m| now - Duration::days(m * DAYS_PER_MONTH)),
            license: None,
            open_issues,
        }
    }

    #[test]
    fn test_recent_push_passes() {
        let now = Utc::now();
        let outcome = evaluate(Some(&hosting(Some(5), 0, now)), false, now, &Config::default()).unwrap();
        assert_eq!(outcome.recency, Verdict::Pass);
        assert_eq!(outcome.months_since_push, Some(5));
    }

    #[test]
    fn test_stale_push_fails() {
        let now = Utc::now();
        let outcome = evaluate(Some(&hosting(Some(7), 0, now)), false, now, &Config::default()).unwrap();
        assert_eq!(outcome.recency, Verdict::Fail);
        assert_eq!(outcome.months_since_push, Some(7));
    }

    #[test]
    fn test_unknown_push_date_passes() {
        let now = Utc::now();
        let outcome = evaluate(Some(&hosting(None, 0, now)), false, now, &Config::default()).unwrap();
        assert_eq!(outcome.recency, Verdict::Pass);
        assert_eq!(outcome.months_since_push, None);
    }

    #[test]
    fn test_issue_volume_over_standard_ceiling_fails() {
        let now = Utc::now();
        let outcome = evaluate(Some(&hosting(Some(1), 150, now)), false, now, &Config::default()).unwrap();
        assert_eq!(outcome.issues, Verdict::Fail);
        assert_eq!(outcome.issue_ceiling, 100);
    }

    #[test]
    fn test_large_project_uses_relaxed_ceiling() {
        let now = Utc::now();

        // 150 would fail a normal package but sits under the large ceiling
        let outcome = evaluate(Some(&hosting(Some(1), 150, now)), true, now, &Config::default()).unwrap();
        assert_eq!(outcome.issues, Verdict::Pass);
        assert_eq!(outcome.issue_ceiling, 500);

        // exceeding the large ceiling is informational, not a hard failure
        let outcome = evaluate(Some(&hosting(Some(1), 600, now)), true, now, &Config::default()).unwrap();
        assert_eq!(outcome.issues, Verdict::Warn);

        // the same count on a non-large package is a hard failure
        let outcome = evaluate(Some(&hosting(Some(1), 600, now)), false, now, &Config::default()).unwrap();
        assert_eq!(outcome.issues, Verdict::Fail);
    }

    #[test]
    fn test_no_repository_skips_evaluation() {
        assert!(evaluate(None, false, Utc::now(), &Config::default()).is_none());
    }
}
