use crate::Result;
use crate::facts::{PackageFacts, PackageRef, RepoLocation, downloads, hosting, locate_repo, registry};
use ohno::IntoAppError;

const LOG_TARGET: &str = " collector";
const USER_AGENT: &str = "pypi-vet";

/// Gathers per-package facts from the external sources.
///
/// Sources are queried strictly in sequence: the registry record determines
/// whether a repository lookup happens at all, and one fetched snapshot is
/// shared by every check that needs repository data.
#[derive(Debug)]
pub struct Collector {
    registry: registry::Provider,
    downloads: downloads::Provider,
    hosting: hosting::Provider,
}

impl Collector {
    /// Create providers for all sources, sharing one HTTP client
    pub fn new(github_token: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            registry: registry::Provider::new(client.clone()),
            downloads: downloads::Provider::new(client),
            hosting: hosting::Provider::new(github_token)?,
        })
    }

    /// Collect facts for a single package.
    ///
    /// The registry lookup and, once a coordinate is resolved, the repository
    /// lookup are mandatory; their failures propagate. The download-stats
    /// lookup is tolerated and degrades to an unknown count.
    pub async fn collect(&self, package: &PackageRef) -> Result<PackageFacts> {
        let downloads = self.downloads.get_recent_downloads(package.name()).await;
        let metadata = self.registry.get_metadata(package.name()).await?;

        let repo = locate_repo(&metadata);
        let hosting = match &repo {
            RepoLocation::Found(spec) => Some(self.hosting.get_hosting_data(spec).await?),
            RepoLocation::Malformed(url) => {
                log::info!(target: LOG_TARGET, "Package '{package}' has a malformed repository URL '{url}', skipping repository checks");
                None
            }
            RepoLocation::NotFound => {
                log::info!(target: LOG_TARGET, "No repository found for package '{package}', skipping repository checks");
                None
            }
        };

        log::debug!(target: LOG_TARGET, "Collected facts for package '{package}' (downloads: {})", downloads.status_str());

        Ok(PackageFacts {
            metadata,
            downloads,
            repo,
            hosting,
        })
    }
}
