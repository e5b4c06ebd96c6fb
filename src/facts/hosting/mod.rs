//! Repository data from the GitHub API.

mod provider;

pub use provider::Provider;

use chrono::{DateTime, Utc};

/// A snapshot of the hosting repository's health signals.
///
/// `open_issues` comes from a targeted search query rather than the
/// repository summary counter, which lumps pull requests in with issues.
#[derive(Debug, Clone)]
pub struct HostingData {
    pub stars: u64,
    pub forks: u64,
    pub pushed_at: Option<DateTime<Utc>>,
    pub license: Option<String>,
    pub open_issues: u64,
}
