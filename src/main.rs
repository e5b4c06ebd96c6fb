//! A tool to vet Python packages against popularity, maintenance, and license policies.
//!
//! # Overview
//!
//! `pypi-vet` evaluates a list of PyPI package names against multi-source health
//! criteria and produces a pass/fail verdict per package plus one for the whole
//! run. It is meant to run as an automated gate in a CI pipeline, blocking the
//! adoption of packages that fail policy.
//!
//! For each package it gathers:
//! - download counts for the last month from pypistats.org,
//! - repository stars, forks, last-push date, and open-issue count from GitHub
//!   (when the package metadata points at a GitHub repository),
//! - the declared license from the PyPI metadata, with classifier-based and
//!   repository-side fallbacks.
//!
//! # Installation
//!
//! ```bash
//! cargo install pypi-vet
//! ```
//!
//! # Basic Usage
//!
//! **Check specific packages:**
//! ```bash
//! pypi-vet check requests flask numpy
//! ```
//!
//! **Check packages from a requirements file:**
//! ```bash
//! pypi-vet check --requirements requirements.txt
//! ```
//!
//! Version specifiers (`package==1.2.3`, `package>=2.0`) are accepted and
//! ignored; only the package name is evaluated.
//!
//! # The Three Criteria
//!
//! **Popularity** passes when any one signal clears its threshold: monthly
//! downloads, repository stars, or repository forks. A package with no
//! popularity evidence at all fails.
//!
//! **Maintenance** checks that the repository was pushed to recently and that
//! the open-issue count stays under a ceiling. Projects classified as large
//! (by download volume) get a relaxed ceiling; exceeding only the relaxed
//! ceiling is a warning rather than a failure unless `strict_large_issues`
//! is enabled. Packages without a resolvable repository skip this criterion.
//!
//! **License** resolves the effective license (metadata field, then trove
//! classifiers, then the repository's detected license) and fails the package
//! when it matches the banned-license list. A package whose license cannot be
//! determined is flagged and fails the run.
//!
//! # CI Integration
//!
//! The process exits non-zero when any package fails, so a plain invocation
//! works as a gate:
//!
//! ```yaml
//! - name: Vet Python dependencies
//!   run: pypi-vet check --requirements requirements.txt
//!   env:
//!     GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
//! ```
//!
//! Exit codes:
//! - `0`: every package passed all criteria
//! - `1`: at least one package failed, or a required data fetch failed
//!
//! # GitHub Access
//!
//! Repository metrics need the GitHub API. Provide a token via the
//! `GITHUB_TOKEN` environment variable or `--github-token`; without one the
//! unauthenticated rate limit (60 requests/hour) applies.
//!
//! # Configuration
//!
//! Thresholds and the banned-license list live in a configuration file,
//! searched for as `vet.toml`, `vet.yml`, `vet.yaml`, or `vet.json` in the
//! working directory, or named explicitly with `--config`:
//!
//! ```yaml
//! min_downloads: 10000
//! min_stars: 1000
//! min_forks: 100
//! large_project_downloads: 1000000
//! staleness_months: 6
//! max_open_issues: 100
//! large_max_open_issues: 500
//! strict_large_issues: false
//! banned_licenses: [GPL, AGPL, LGPL, SSPL, CC, Sleepycat]
//! ```
//!
//! **Generate a commented default config:**
//! ```bash
//! pypi-vet init vet.yml
//! ```
//!
//! **Validate a config without running checks:**
//! ```bash
//! pypi-vet validate --config vet.yml
//! ```

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use pypi_vet::Result;

mod commands;

use crate::commands::{CheckArgs, InitArgs, ValidateArgs, init_config, run_check, validate_config};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pypi-vet", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: VetSubcommand,
}

#[derive(Subcommand, Debug)]
enum VetSubcommand {
    /// Check packages against the health criteria and fail on any issue
    Check(CheckArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        VetSubcommand::Check(check_args) => run_check(check_args).await,
        VetSubcommand::Init(init_args) => init_config(init_args),
        VetSubcommand::Validate(validate_args) => validate_config(validate_args),
    }
}
