use crate::facts::PackageMetadata;
use core::fmt::{Display, Formatter};

/// Domain marker identifying a hosting repository URL
const HOSTING_DOMAIN: &str = "github.com";

/// Owner/name pair identifying a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Box<str>,
    repo: Box<str>,
}

/// Outcome of searching package metadata for a hosting repository.
///
/// `Malformed` and `NotFound` both suppress repository-based checks, but they
/// stay distinct so diagnostics can tell a broken URL from a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLocation {
    Found(RepoSpec),
    Malformed(Box<str>),
    NotFound,
}

impl RepoSpec {
    /// Extract an owner/name pair from the text following the domain marker.
    ///
    /// Candidates are not required to be well-formed URLs: the pattern
    /// `github.com/<owner>/<name>` anywhere in the string is enough, which
    /// covers the scheme-less and `www.`-prefixed spellings that appear in
    /// real registry metadata.
    fn parse(candidate: &str) -> Option<Self> {
        let start = candidate.find(HOSTING_DOMAIN)? + HOSTING_DOMAIN.len();
        let rest = candidate.get(start..)?.strip_prefix('/')?;

        let mut segments = rest.split('/');
        let owner = segments.next().filter(|s| !s.is_empty())?;
        let repo = segments.next().filter(|s| !s.is_empty())?;

        Some(Self {
            owner: Box::from(owner),
            repo: Box::from(repo.trim_end_matches(".git")),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Search package metadata for the hosting repository.
///
/// Candidates are tried in order: every project URL in registry order, then
/// the homepage. The first candidate mentioning the hosting domain is parsed;
/// a candidate that mentions the domain but does not yield an owner/name pair
/// is reported as `Malformed` rather than falling through to later candidates.
#[must_use]
pub fn locate_repo(metadata: &PackageMetadata) -> RepoLocation {
    let candidate = metadata
        .project_urls()
        .find(|u| u.contains(HOSTING_DOMAIN))
        .or_else(|| metadata.home_page.as_deref().filter(|u| u.contains(HOSTING_DOMAIN)));

    match candidate {
        Some(url) => RepoSpec::parse(url).map_or_else(|| RepoLocation::Malformed(Box::from(url)), RepoLocation::Found),
        None => RepoLocation::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn metadata(project_urls: &[(&str, &str)], home_page: Option<&str>) -> PackageMetadata {
        let mut map = Map::new();
        for (label, url) in project_urls {
            let _ = map.insert((*label).to_owned(), Value::String((*url).to_owned()));
        }

        PackageMetadata {
            license: None,
            classifiers: Vec::new(),
            project_urls: (!map.is_empty()).then_some(map),
            home_page: home_page.map(str::to_owned),
        }
    }

    #[test]
    fn test_project_url_wins_over_homepage() {
        let md = metadata(
            &[("Documentation", "https://example.readthedocs.io"), ("Source", "https://github.com/psf/requests")],
            Some("https://github.com/other/elsewhere"),
        );

        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(spec.owner(), "psf");
        assert_eq!(spec.repo(), "requests");
    }

    #[test]
    fn test_homepage_fallback() {
        let md = metadata(&[("Documentation", "https://example.readthedocs.io")], Some("https://github.com/pallets/flask"));

        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(format!("{spec}"), "pallets/flask");
    }

    #[test]
    fn test_no_candidate_is_not_found() {
        let md = metadata(&[("Homepage", "https://example.com")], Some("https://example.com"));
        assert_eq!(locate_repo(&md), RepoLocation::NotFound);
    }

    #[test]
    fn test_missing_urls_is_not_found() {
        let md = metadata(&[], None);
        assert_eq!(locate_repo(&md), RepoLocation::NotFound);
    }

    #[test]
    fn test_structural_mismatch_is_malformed() {
        let md = metadata(&[("Source", "https://github.com/justowner")], None);
        assert!(matches!(locate_repo(&md), RepoLocation::Malformed(_)));

        // mentions the domain but no owner/name pair follows it
        let md = metadata(&[("Source", "see github.com for details")], None);
        assert!(matches!(locate_repo(&md), RepoLocation::Malformed(_)));
    }

    #[test]
    fn test_scheme_and_subdomain_variants_resolve() {
        let md = metadata(&[("Source", "https://www.github.com/psf/requests")], None);
        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(format!("{spec}"), "psf/requests");

        let md = metadata(&[("Source", "github.com/pallets/flask")], None);
        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(format!("{spec}"), "pallets/flask");
    }

    #[test]
    fn test_git_suffix_is_trimmed() {
        let md = metadata(&[("Source", "https://github.com/psf/requests.git")], None);
        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(spec.repo(), "requests");
    }

    #[test]
    fn test_extra_path_segments_are_ignored() {
        let md = metadata(&[("Source", "https://github.com/psf/requests/tree/main/src")], None);
        let RepoLocation::Found(spec) = locate_repo(&md) else {
            panic!("expected a resolved repository");
        };
        assert_eq!(format!("{spec}"), "psf/requests");
    }
}
