use crate::checks::Verdict;
use crate::config::Config;
use crate::facts::HostingData;

/// Popularity evaluation: the raw figures consulted and the verdict
#[derive(Debug, Clone)]
pub struct PopularityOutcome {
    pub verdict: Verdict,
    pub downloads: Option<u64>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,

    /// Downloads exceeded the large-project cutoff; relaxes the
    /// maintenance criterion's open-issue ceiling
    pub large: bool,
}

/// Judge popularity from download and repository signals.
///
/// A single strong signal is enough: the criterion passes if any of the
/// download, star, or fork thresholds is met. With no evidence at all the
/// criterion fails; missing data is not a free pass.
#[must_use]
pub fn evaluate(downloads: Option<u64>, hosting: Option<&HostingData>, config: &Config) -> PopularityOutcome {
    let stars = hosting.map(|h| h.stars);
    let forks = hosting.map(|h| h.forks);

    let popular = downloads.is_some_and(|d| d >= config.min_downloads)
        || stars.is_some_and(|s| s >= config.min_stars)
        || forks.is_some_and(|f| f >= config.min_forks);

    PopularityOutcome {
        verdict: if popular { Verdict::Pass } else { Verdict::Fail },
        downloads,
        stars,
        forks,
        large: downloads.is_some_and(|d| d >= config.large_project_downloads),
    }
}
