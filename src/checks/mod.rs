//! The evidence-aggregation and decision engine
//!
//! This module turns the facts collected for a package into verdicts. Each of
//! the three criteria is a pure function over [`PackageFacts`](crate::facts::PackageFacts)
//! and the configured thresholds:
//!
//! - **Popularity**: a logical OR across download, star, and fork thresholds;
//!   any single strong signal is enough, but no evidence at all is a failure.
//!   Also classifies high-volume packages as "large", which relaxes the
//!   maintenance criterion's open-issue ceiling.
//! - **Maintenance**: push recency plus open-issue volume, evaluated
//!   independently. Skipped entirely when no repository was resolved.
//! - **License**: an ordered resolution pipeline over the registry license
//!   field, the trove classifiers, and the repository-detected license,
//!   followed by substring matching against the denylist.
//!
//! No I/O happens here; evaluating the same facts twice yields the same
//! verdicts.

mod criterion;
pub mod license;
pub mod maintenance;
pub mod popularity;
mod report;

pub use criterion::Verdict;
pub use report::{PackageReport, RunReport, evaluate_package};
