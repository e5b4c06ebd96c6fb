use crate::Result;
use crate::facts::PackageMetadata;
use ohno::{IntoAppError, bail};
use serde::Deserialize;

const LOG_TARGET: &str = "  registry";
const REGISTRY_URL: &str = "https://pypi.org/pypi";

#[derive(Debug, Deserialize)]
struct RegistryDoc {
    info: PackageMetadata,
}

/// Client for the PyPI JSON metadata API
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
}

impl Provider {
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the registry record for a package.
    ///
    /// This lookup is mandatory: transport failures and unknown packages are
    /// both hard errors that abort the run.
    pub async fn get_metadata(&self, name: &str) -> Result<PackageMetadata> {
        let url = format!("{REGISTRY_URL}/{name}/json");

        log::info!(target: LOG_TARGET, "Querying registry metadata for package '{name}'");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .into_app_err_with(|| format!("could not reach the package registry for package '{name}'"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            bail!("package '{name}' is not known to the registry");
        }

        let response = response
            .error_for_status()
            .into_app_err_with(|| format!("registry lookup failed for package '{name}'"))?;

        let doc: RegistryDoc = response
            .json()
            .await
            .into_app_err_with(|| format!("malformed registry metadata for package '{name}'"))?;

        log::debug!(target: LOG_TARGET, "Fetched registry metadata for package '{name}'");

        Ok(doc.info)
    }
}
