use crate::checks::license::{self, LicenseOutcome};
use crate::checks::maintenance::{self, MaintenanceOutcome};
use crate::checks::popularity::{self, PopularityOutcome};
use crate::checks::Verdict;
use crate::config::Config;
use crate::facts::{PackageFacts, PackageRef, RepoLocation};
use chrono::{DateTime, Utc};

/// The evaluated criteria for a single package
#[derive(Debug)]
pub struct PackageReport {
    pub package: PackageRef,
    pub repo: RepoLocation,
    pub popularity: PopularityOutcome,

    /// `None` when no repository was resolved and maintenance was not evaluated
    pub maintenance: Option<MaintenanceOutcome>,

    pub license: LicenseOutcome,
    has_issue: bool,
}

impl PackageReport {
    /// Whether any criterion failed at a run-failing level
    #[must_use]
    pub const fn has_issue(&self) -> bool {
        self.has_issue
    }
}

/// Evaluate all three criteria for one package.
///
/// Pure aggregation over already-fetched facts; evaluating the same facts
/// twice yields identical verdicts. Popularity runs first because its
/// large-project classification feeds the maintenance issue ceiling.
#[must_use]
pub fn evaluate_package(package: &PackageRef, facts: &PackageFacts, now: DateTime<Utc>, config: &Config) -> PackageReport {
    let popularity = popularity::evaluate(facts.downloads.value().copied(), facts.hosting.as_ref(), config);
    let maintenance = maintenance::evaluate(facts.hosting.as_ref(), popularity.large, now, config);
    let license = license::evaluate(&facts.metadata, facts.hosting.as_ref(), config);

    let maintenance_issue = maintenance.as_ref().is_some_and(|m| {
        m.recency.is_fail() || m.issues.is_fail() || (m.issues == Verdict::Warn && config.strict_large_issues)
    });

    // A missing license is reported as a warning but still fails the run
    let has_issue = popularity.verdict.is_fail() || maintenance_issue || license.verdict.is_fail() || license.verdict == Verdict::Warn;

    PackageReport {
        package: package.clone(),
        repo: facts.repo.clone(),
        popularity,
        maintenance,
        license,
        has_issue,
    }
}

/// The run-level accumulator: any package with an issue fails the run
#[derive(Debug, Default)]
pub struct RunReport {
    packages: Vec<PackageReport>,
    has_issue: bool,
}

impl RunReport {
    pub fn record(&mut self, report: PackageReport) {
        self.has_issue = self.has_issue || report.has_issue;
        self.packages.push(report);
    }

    #[must_use]
    pub const fn has_issue(&self) -> bool {
        self.has_issue
    }

    #[must_use]
    pub fn packages(&self) -> &[PackageReport] {
        &self.packages
    }
}
