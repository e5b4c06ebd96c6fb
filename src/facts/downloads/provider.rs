use crate::Result;
use crate::facts::SourceResult;
use ohno::IntoAppError;
use serde::Deserialize;
use std::sync::Arc;

const LOG_TARGET: &str = " downloads";
const STATS_URL: &str = "https://pypistats.org/api/packages";

#[derive(Debug, Deserialize)]
struct RecentDoc {
    data: RecentData,
}

#[derive(Debug, Deserialize)]
struct RecentData {
    last_month: u64,
}

/// Client for the pypistats.org recent-downloads API
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
}

impl Provider {
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the last-30-day download count for a package.
    ///
    /// Best-effort: a transport or lookup failure degrades to an unknown
    /// count and must never abort the package evaluation.
    pub async fn get_recent_downloads(&self, name: &str) -> SourceResult<u64> {
        log::info!(target: LOG_TARGET, "Querying download statistics for package '{name}'");

        match self.fetch(name).await {
            Ok(Some(downloads)) => SourceResult::Found(downloads),
            Ok(None) => {
                log::info!(target: LOG_TARGET, "No download statistics available for package '{name}'");
                SourceResult::NotFound
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not fetch download statistics for package '{name}': {e}");
                SourceResult::Error(Arc::new(e))
            }
        }
    }

    async fn fetch(&self, name: &str) -> Result<Option<u64>> {
        let url = format!("{STATS_URL}/{name}/recent");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .into_app_err_with(|| format!("could not reach the download-statistics service for package '{name}'"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .into_app_err_with(|| format!("download-statistics lookup failed for package '{name}'"))?;

        let doc: RecentDoc = response
            .json()
            .await
            .into_app_err_with(|| format!("malformed download statistics for package '{name}'"))?;

        Ok(Some(doc.data.last_month))
    }
}
