//! Package metadata from the PyPI JSON API.

mod provider;

pub use provider::Provider;

use serde::Deserialize;
use serde_json::{Map, Value};

/// The registry record for a package, as served by the PyPI JSON API.
///
/// Only the fields the checks consume are modelled; the registry record
/// carries much more.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMetadata {
    /// The declared license, often free-form or the literal "UNKNOWN"
    pub license: Option<String>,

    /// Trove classifier strings
    #[serde(default)]
    pub classifiers: Vec<String>,

    /// Labeled project URLs in registry order; values can be null
    #[serde(default)]
    pub project_urls: Option<Map<String, Value>>,

    /// Homepage URL, used as the last-resort repository candidate
    pub home_page: Option<String>,
}

impl PackageMetadata {
    /// All project URL values in registry order, skipping null entries
    pub fn project_urls(&self) -> impl Iterator<Item = &str> {
        self.project_urls.iter().flat_map(Map::values).filter_map(Value::as_str)
    }
}
