use super::common::{CommonArgs, init_logging, load_config};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::{IntoAppError, bail};
use pypi_vet::Result;
use pypi_vet::checks::{RunReport, evaluate_package};
use pypi_vet::facts::{Collector, PackageRef};
use pypi_vet::reports::{write_package_report, write_run_summary};
use std::fs;

const LOG_TARGET: &str = "     check";

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Packages to check (version specifiers are ignored)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Read additional package names from a requirements file
    #[arg(long, short = 'r', value_name = "PATH")]
    pub requirements: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Evaluate every package and fail if any of them has an issue.
pub async fn run_check(args: &CheckArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let config = load_config(args.common.config.as_ref())?;
    let packages = gather_packages(args)?;
    let colorize = args.common.color.should_colorize();

    let collector = Collector::new(args.common.github_token.as_deref())?;
    let mut run = RunReport::default();

    for package in &packages {
        let facts = collector.collect(package).await?;
        let report = evaluate_package(package, &facts, Utc::now(), &config);

        let mut output = String::new();
        write_package_report(&report, colorize, &mut output)?;
        print!("{output}");

        run.record(report);
    }

    let mut output = String::new();
    write_run_summary(&run, colorize, &mut output)?;
    print!("{output}");

    if run.has_issue() {
        bail!("one or more packages failed the health check");
    }

    Ok(())
}

fn gather_packages(args: &CheckArgs) -> Result<Vec<PackageRef>> {
    let mut packages = Vec::new();

    for line in &args.packages {
        match PackageRef::from_line(line) {
            Some(package) => packages.push(package),
            None => log::warn!(target: LOG_TARGET, "Ignoring package argument '{line}' with no package name"),
        }
    }

    if let Some(path) = &args.requirements {
        let contents = fs::read_to_string(path).into_app_err_with(|| format!("unable to read '{path}'"))?;
        packages.extend(PackageRef::parse_list(&contents));
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::super::common::LogLevel;
    use super::*;
    use pypi_vet::misc::ColorMode;

    #[test]
    fn test_empty_package_arguments_are_skipped() {
        let args = CheckArgs {
            packages: vec!["requests==2.31.0".to_owned(), "==1.0".to_owned(), "   ".to_owned()],
            requirements: None,
            common: CommonArgs {
                github_token: None,
                config: None,
                color: ColorMode::Never,
                log_level: LogLevel::None,
            },
        };

        let packages = gather_packages(&args).unwrap();
        let names: Vec<_> = packages.iter().map(PackageRef::name).collect();
        assert_eq!(names, ["requests"]);
    }
}
