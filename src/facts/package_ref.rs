use core::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

/// A bare package name parsed from one line of a requirements-style list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    name: Arc<str>,
}

impl PackageRef {
    /// Parse one dependency declaration line, stripping any version specifier.
    ///
    /// The name is everything before the first `=`, `<`, `>`, or `!`. Lines
    /// that reduce to nothing yield `None`.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let name = line.split(['=', '<', '>', '!']).next().unwrap_or_default().trim();
        (!name.is_empty()).then(|| Self { name: Arc::from(name) })
    }

    /// Parse a newline-separated dependency list, discarding blank results
    #[must_use]
    pub fn parse_list(content: &str) -> Vec<Self> {
        content.lines().filter_map(Self::from_line).collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for PackageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_trimmed_line() {
        let package = PackageRef::from_line("  requests  ").unwrap();
        assert_eq!(package.name(), "requests");
    }

    #[test]
    fn test_version_specifiers_are_stripped() {
        assert_eq!(PackageRef::from_line("requests==2.31.0").unwrap().name(), "requests");
        assert_eq!(PackageRef::from_line("numpy>=1.24").unwrap().name(), "numpy");
        assert_eq!(PackageRef::from_line("flask<3.0").unwrap().name(), "flask");
        assert_eq!(PackageRef::from_line("pandas!=2.0.1").unwrap().name(), "pandas");
        assert_eq!(PackageRef::from_line("django =4.2").unwrap().name(), "django");
    }

    #[test]
    fn test_empty_results_are_discarded() {
        assert!(PackageRef::from_line("").is_none());
        assert!(PackageRef::from_line("   ").is_none());
        assert!(PackageRef::from_line("==1.0").is_none());
    }

    #[test]
    fn test_parse_list_skips_blank_lines() {
        let refs = PackageRef::parse_list("requests==2.31.0\n\nnumpy\n   \nflask>=2.0\n");
        let names: Vec<_> = refs.iter().map(PackageRef::name).collect();
        assert_eq!(names, ["requests", "numpy", "flask"]);
    }
}
