use std::sync::Arc;

/// Outcome of querying an optional external data source.
///
/// Unlike the mandatory registry and repository lookups, sources queried
/// through this type never abort the run; the checks treat anything other
/// than `Found` as missing evidence.
#[derive(Debug, Clone)]
pub enum SourceResult<T> {
    /// The source answered and had data for the package.
    Found(T),

    /// The source answered but knows nothing about the package.
    NotFound,

    /// The source could not be queried.
    Error(Arc<ohno::AppError>),
}

impl<T> SourceResult<T> {
    /// Returns the data for `Found`, `None` otherwise
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            Self::NotFound | Self::Error(_) => None,
        }
    }

    /// Returns a string describing the status of this result
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Found(_) => "Found",
            Self::NotFound => "NotFound",
            Self::Error(_) => "Error",
        }
    }
}
