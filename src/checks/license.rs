use crate::checks::Verdict;
use crate::config::Config;
use crate::facts::{HostingData, PackageMetadata};

/// Registry placeholder that counts as "no license declared"
const UNKNOWN_PLACEHOLDER: &str = "unknown";

/// Trove classifier prefix marking license entries
const CLASSIFIER_PREFIX: &str = "License ::";
const CLASSIFIER_SEPARATOR: &str = " :: ";

/// License evaluation: the resolved license string, if any, and the verdict
#[derive(Debug, Clone)]
pub struct LicenseOutcome {
    /// Warn means no license could be resolved at all; the run still fails
    pub verdict: Verdict,
    pub license: Option<String>,
}

/// Resolve the package license and judge it against the denylist.
///
/// Resolution tries, in order: the registry's license field (the literal
/// "UNKNOWN" placeholder counts as empty), the last `License ::` classifier's
/// trailing segment, and finally the license the hosting provider detected.
/// A resolved license fails when it contains any denylisted token as a
/// substring; this is deliberately coarse, not exact identifier matching.
#[must_use]
pub fn evaluate(metadata: &PackageMetadata, hosting: Option<&HostingData>, config: &Config) -> LicenseOutcome {
    let Some(license) = resolve(metadata, hosting) else {
        return LicenseOutcome {
            verdict: Verdict::Warn,
            license: None,
        };
    };

    let banned = config.banned_licenses.iter().any(|bad| license.contains(bad.as_str()));

    LicenseOutcome {
        verdict: if banned { Verdict::Fail } else { Verdict::Pass },
        license: Some(license),
    }
}

/// First non-empty winner of the resolution pipeline
fn resolve(metadata: &PackageMetadata, hosting: Option<&HostingData>) -> Option<String> {
    from_license_field(metadata)
        .or_else(|| from_classifiers(metadata))
        .or_else(|| from_hosting(hosting))
}

fn from_license_field(metadata: &PackageMetadata) -> Option<String> {
    let license = metadata.license.as_deref()?.trim();
    if license.is_empty() || license.eq_ignore_ascii_case(UNKNOWN_PLACEHOLDER) {
        return None;
    }

    Some(license.to_owned())
}

/// Later classifiers are assumed more specific, so the last match wins
fn from_classifiers(metadata: &PackageMetadata) -> Option<String> {
    metadata
        .classifiers
        .iter()
        .filter(|c| c.starts_with(CLASSIFIER_PREFIX))
        .next_back()
        .and_then(|c| c.rsplit(CLASSIFIER_SEPARATOR).next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn from_hosting(hosting: Option<&HostingData>) -> Option<String> {
    hosting?.license.clone().filter(|l| !l.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(license: Option<&str>, classifiers: &[&str]) -> PackageMetadata {
        PackageMetadata {
            license: license.map(str::to_owned),
            classifiers: classifiers.iter().map(|&c| c.to_owned()).collect(),
            project_urls: None,
            home_page: None,
        }
    }

    fn hosting_with_license(license: Option<&str>) -> HostingData {
        HostingData {
            stars: 0,
            forks: 0,
            pushed_at: None,
            license: license.map(str::to_owned),
            open_issues: 0,
        }
    }

    #[test]
    fn test_direct_license_field_wins() {
        let md = metadata(Some("MIT"), &["License :: OSI Approved :: Apache Software License"]);
        let outcome = evaluate(&md, None, &Config::default());
        assert_eq!(outcome.license.as_deref(), Some("MIT"));
        assert_eq!(outcome.verdict, Verdict::Pass);
    }

    #[test]
    fn test_last_matching_classifier_wins() {
        let md = metadata(Some(""), &["License :: OSI Approved", "License :: OSI Approved :: MIT License"]);
        let outcome = evaluate(&md, None, &Config::default());
        assert_eq!(outcome.license.as_deref(), Some("MIT License"));
        assert_eq!(outcome.verdict, Verdict::Pass);
    }

    #[test]
    fn test_unknown_placeholder_counts_as_empty() {
        let md = metadata(Some("UNKNOWN"), &["License :: OSI Approved :: MIT License"]);
        let outcome = evaluate(&md, None, &Config::default());
        assert_eq!(outcome.license.as_deref(), Some("MIT License"));

        let md = metadata(Some("unknown"), &[]);
        let outcome = evaluate(&md, None, &Config::default());
        assert_eq!(outcome.license, None);
    }

    #[test]
    fn test_hosting_fallback() {
        let md = metadata(None, &[]);
        let outcome = evaluate(&md, Some(&hosting_with_license(Some("BSD 3-Clause \"New\" or \"Revised\" License"))), &Config::default());
        assert_eq!(outcome.verdict, Verdict::Pass);
        assert!(outcome.license.unwrap().contains("BSD"));
    }

    #[test]
    fn test_denylist_substring_match_fails() {
        let md = metadata(Some("GNU General Public License v3 (GPLv3)"), &[]);
        let outcome = evaluate(&md, None, &Config::default());
        assert_eq!(outcome.verdict, Verdict::Fail);
    }

    #[test]
    fn test_unresolved_license_warns() {
        let md = metadata(None, &["Programming Language :: Python :: 3"]);
        let outcome = evaluate(&md, Some(&hosting_with_license(None)), &Config::default());
        assert_eq!(outcome.verdict, Verdict::Warn);
        assert_eq!(outcome.license, None);
    }
}
