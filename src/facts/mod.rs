//! Data collection for PyPI packages
//!
//! This module gathers the raw evidence the health checks consume. Three
//! external sources feed it:
//!
//! - **Registry metadata**: the PyPI JSON API record (license, classifiers,
//!   project URLs, homepage). This lookup is mandatory; a failure aborts the
//!   whole run.
//! - **Download statistics**: the pypistats.org last-30-day count. This
//!   lookup is best-effort; failures degrade to "unknown" via
//!   [`SourceResult`].
//! - **Repository hosting**: GitHub repository summary plus the exact
//!   open-issue count from the issue-search endpoint. Mandatory once the
//!   registry metadata yields a repository coordinate.
//!
//! The [`Collector`] runs these lookups strictly in sequence for one package
//! at a time and bundles the answers into a [`PackageFacts`], which the
//! checks then evaluate without any further I/O.

mod collector;
pub mod downloads;
pub mod hosting;
mod package_facts;
mod package_ref;
pub mod registry;
mod repo_spec;
mod source_result;

pub use collector::Collector;
pub use hosting::HostingData;
pub use package_facts::PackageFacts;
pub use package_ref::PackageRef;
pub use registry::PackageMetadata;
pub use repo_spec::{RepoLocation, RepoSpec, locate_repo};
pub use source_result::SourceResult;
