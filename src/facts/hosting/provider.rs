use crate::Result;
use crate::facts::{HostingData, RepoSpec};
use octocrab::Octocrab;
use ohno::EnrichableExt;

const LOG_TARGET: &str = "   hosting";

/// Client for the GitHub repository and issue-search endpoints
#[derive(Debug, Clone)]
pub struct Provider {
    octocrab: Octocrab,
}

impl Provider {
    /// Create a new GitHub API client
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();

        if let Some(t) = token {
            builder = builder.personal_token(t.to_owned());
        }

        Ok(Self { octocrab: builder.build()? })
    }

    /// Fetch the repository summary and the exact open-issue count.
    ///
    /// Mandatory once a coordinate has been resolved: any failure here
    /// propagates and aborts the run.
    pub async fn get_hosting_data(&self, repo: &RepoSpec) -> Result<HostingData> {
        log::info!(target: LOG_TARGET, "Querying GitHub for repository '{repo}'");

        let summary = self
            .get_repo_summary(repo)
            .await
            .map_err(|e| e.enrich_with(|| format!("could not fetch repository '{repo}'")))?;

        let open_issues = self
            .get_open_issue_count(repo)
            .await
            .map_err(|e| e.enrich_with(|| format!("could not count open issues for repository '{repo}'")))?;

        log::debug!(target: LOG_TARGET, "Fetched hosting data for repository '{repo}'");

        Ok(HostingData {
            stars: u64::from(summary.stargazers_count.unwrap_or(0)),
            forks: u64::from(summary.forks_count.unwrap_or(0)),
            pushed_at: summary.pushed_at,
            license: summary.license.map(|l| l.name),
            open_issues,
        })
    }

    async fn get_repo_summary(&self, repo: &RepoSpec) -> Result<octocrab::models::Repository> {
        Ok(self.octocrab.repos(repo.owner(), repo.repo()).get().await?)
    }

    /// Count open issues with a targeted search query.
    ///
    /// The repository summary's `open_issues_count` includes pull requests,
    /// so a `repo:<owner>/<name> is:issue is:open` search is used instead.
    async fn get_open_issue_count(&self, repo: &RepoSpec) -> Result<u64> {
        let query = format!("repo:{repo} is:issue is:open");

        log::debug!(target: LOG_TARGET, "Counting open issues with query '{query}'");

        let page = self.octocrab.search().issues_and_pull_requests(&query).per_page(1).send().await?;

        Ok(page.total_count.unwrap_or(0))
    }
}
