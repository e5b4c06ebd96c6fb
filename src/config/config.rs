use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

const fn default_min_downloads() -> u64 {
    10_000
}

const fn default_min_stars() -> u64 {
    1_000
}

const fn default_min_forks() -> u64 {
    100
}

const fn default_large_project_downloads() -> u64 {
    1_000_000
}

const fn default_staleness_months() -> i64 {
    6
}

const fn default_max_open_issues() -> u64 {
    100
}

const fn default_large_max_open_issues() -> u64 {
    500
}

fn default_banned_licenses() -> Vec<String> {
    ["GPL", "AGPL", "LGPL", "SSPL", "CC", "Sleepycat"].map(String::from).to_vec()
}

/// Policy thresholds for the health checks
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum last-30-day downloads for the popularity criterion
    #[serde(default = "default_min_downloads")]
    pub min_downloads: u64,

    /// Minimum repository stars for the popularity criterion
    #[serde(default = "default_min_stars")]
    pub min_stars: u64,

    /// Minimum repository forks for the popularity criterion
    #[serde(default = "default_min_forks")]
    pub min_forks: u64,

    /// Download volume at which a package counts as a large project
    #[serde(default = "default_large_project_downloads")]
    pub large_project_downloads: u64,

    /// Number of 30-day months without a push before a repository counts as stale
    #[serde(default = "default_staleness_months")]
    pub staleness_months: i64,

    /// Open-issue ceiling for ordinary packages; exceeding it is a failure
    #[serde(default = "default_max_open_issues")]
    pub max_open_issues: u64,

    /// Open-issue ceiling for large projects; exceeding it is a warning
    #[serde(default = "default_large_max_open_issues")]
    pub large_max_open_issues: u64,

    /// Treat the large-project open-issue warning as a run failure
    #[serde(default)]
    pub strict_large_issues: bool,

    /// License tokens that force a failure when they appear anywhere in a
    /// resolved license string
    #[serde(default = "default_banned_licenses")]
    pub banned_licenses: Vec<String>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading pypi-vet configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                Utf8PathBuf::from("vet.toml"),
                Utf8PathBuf::from("vet.yml"),
                Utf8PathBuf::from("vet.yaml"),
                Utf8PathBuf::from("vet.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading pypi-vet configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration to a file, preserving comments for YAML format
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();

        if matches!(extension, "yml" | "yaml") {
            // For YAML, write the raw default content with comments preserved
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
            Ok(())
        } else {
            Self::default().save(output_path)
        }
    }

    /// Validate the configuration to detect non-sensical policies
    fn validate(&self, warnings: &mut Vec<String>) {
        if self.large_max_open_issues < self.max_open_issues {
            warnings.push(format!(
                "large_max_open_issues ({}) is below max_open_issues ({}); large projects would be held to a stricter ceiling",
                self.large_max_open_issues, self.max_open_issues
            ));
        }

        if self.large_project_downloads < self.min_downloads {
            warnings.push(format!(
                "large_project_downloads ({}) is below min_downloads ({}); every package passing on downloads would count as large",
                self.large_project_downloads, self.min_downloads
            ));
        }

        if self.staleness_months <= 0 {
            warnings.push(format!(
                "staleness_months ({}) is not positive; every repository with a known push date would count as stale",
                self.staleness_months
            ));
        }

        if self.banned_licenses.iter().any(|b| b.trim().is_empty()) {
            warnings.push("banned_licenses contains a blank entry, which matches every license".to_owned());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_thresholds() {
        let config = Config::default();
        assert_eq!(config.min_downloads, 10_000);
        assert_eq!(config.min_stars, 1_000);
        assert_eq!(config.min_forks, 100);
        assert_eq!(config.large_project_downloads, 1_000_000);
        assert_eq!(config.staleness_months, 6);
        assert_eq!(config.max_open_issues, 100);
        assert_eq!(config.large_max_open_issues, 500);
        assert!(!config.strict_large_issues);
        assert!(config.banned_licenses.iter().any(|b| b == "GPL"));
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("min_downloads: 50000\n").unwrap();
        assert_eq!(config.min_downloads, 50_000);
        assert_eq!(config.min_stars, 1_000);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: core::result::Result<Config, _> = serde_yaml::from_str("minimum_downloads: 50000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_flags_inverted_ceilings() {
        let config = Config {
            large_max_open_issues: 50,
            ..Config::default()
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("large_max_open_issues"));
    }

    #[test]
    fn test_validation_flags_blank_denylist_entry() {
        let mut config = Config::default();
        config.banned_licenses.push("  ".to_owned());

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert!(warnings.iter().any(|w| w.contains("banned_licenses")));
    }
}
