use crate::facts::{HostingData, PackageMetadata, RepoLocation, SourceResult};

/// Everything the checks consume for one package, fetched once per run
#[derive(Debug)]
pub struct PackageFacts {
    /// The registry record; its fetch is mandatory
    pub metadata: PackageMetadata,

    /// Last-30-day download count; best-effort
    pub downloads: SourceResult<u64>,

    /// Outcome of locating the hosting repository
    pub repo: RepoLocation,

    /// The repository snapshot, present when a coordinate was resolved
    pub hosting: Option<HostingData>,
}
