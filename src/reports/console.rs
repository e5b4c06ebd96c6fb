use crate::Result;
use crate::checks::{PackageReport, RunReport, Verdict};
use crate::facts::RepoLocation;
use core::fmt::Write;
use owo_colors::OwoColorize;

const LABEL_WIDTH: usize = 12;

/// Write the per-check status lines for one package
pub fn write_package_report<W: Write>(report: &PackageReport, colorize: bool, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Checking package '{}'", report.package)?;

    match report.popularity.downloads {
        Some(downloads) => writeln!(writer, "  downloads last month: {downloads}")?,
        None => writeln!(writer, "  downloads last month: unknown")?,
    }

    if let (Some(stars), Some(forks)) = (report.popularity.stars, report.popularity.forks) {
        writeln!(writer, "  stars: {stars}, forks: {forks}")?;
    }

    write_popularity(report, colorize, writer)?;
    write_maintenance(report, colorize, writer)?;
    write_license(report, colorize, writer)?;

    Ok(())
}

/// Write the single success/failure line that closes the run
pub fn write_run_summary<W: Write>(run: &RunReport, colorize: bool, writer: &mut W) -> Result<()> {
    let total = run.packages().len();
    let failing = run.packages().iter().filter(|p| p.has_issue()).count();

    writeln!(writer)?;

    if run.has_issue() {
        let message = format!("✗ {failing} of {total} package(s) failed the health check");
        writeln!(writer, "{}", if colorize { message.red().to_string() } else { message })?;
    } else {
        let message = format!("✓ All {total} package(s) passed the health check");
        writeln!(writer, "{}", if colorize { message.green().to_string() } else { message })?;
    }

    Ok(())
}

fn write_popularity<W: Write>(report: &PackageReport, colorize: bool, writer: &mut W) -> Result<()> {
    let detail = if report.popularity.verdict.is_fail() {
        "no popularity signal meets its threshold".to_owned()
    } else if report.popularity.large {
        "large project".to_owned()
    } else {
        "at least one popularity signal meets its threshold".to_owned()
    };

    write_check_line(writer, "popularity", report.popularity.verdict, &detail, colorize)
}

fn write_maintenance<W: Write>(report: &PackageReport, colorize: bool, writer: &mut W) -> Result<()> {
    let Some(maintenance) = &report.maintenance else {
        let reason = match &report.repo {
            RepoLocation::Malformed(url) => format!("malformed repository URL '{url}'"),
            _ => "no repository found".to_owned(),
        };

        writeln!(writer, "  {label:<width$} skipped ({reason})", label = "maintenance:", width = LABEL_WIDTH)?;
        return Ok(());
    };

    let recency_detail = match maintenance.months_since_push {
        Some(months) if maintenance.recency.is_fail() => format!("no push in {months} month(s)"),
        Some(months) => format!("last push {months} month(s) ago"),
        None => "last push date unknown".to_owned(),
    };
    write_check_line(writer, "recency", maintenance.recency, &recency_detail, colorize)?;

    let issues_detail = match maintenance.issues {
        Verdict::Pass => format!("{} open issue(s), ceiling {}", maintenance.open_issues, maintenance.issue_ceiling),
        Verdict::Fail => format!(
            "{} open issue(s) exceeds the ceiling of {}",
            maintenance.open_issues, maintenance.issue_ceiling
        ),
        Verdict::Warn => format!(
            "{} open issue(s) exceeds the large-project ceiling of {}",
            maintenance.open_issues, maintenance.issue_ceiling
        ),
    };
    write_check_line(writer, "issues", maintenance.issues, &issues_detail, colorize)
}

fn write_license<W: Write>(report: &PackageReport, colorize: bool, writer: &mut W) -> Result<()> {
    let detail = match (&report.license.verdict, &report.license.license) {
        (Verdict::Fail, Some(license)) => format!("'{license}' matches the denylist"),
        (_, Some(license)) => license.clone(),
        _ => "insufficient license information".to_owned(),
    };

    write_check_line(writer, "license", report.license.verdict, &detail, colorize)
}

fn write_check_line<W: Write>(writer: &mut W, label: &str, verdict: Verdict, detail: &str, colorize: bool) -> Result<()> {
    writeln!(
        writer,
        "  {label:<width$} {verdict} ({detail})",
        label = format!("{label}:"),
        verdict = verdict_word(verdict, colorize),
        width = LABEL_WIDTH
    )?;

    Ok(())
}

fn verdict_word(verdict: Verdict, colorize: bool) -> String {
    let word = match verdict {
        Verdict::Pass => "pass",
        Verdict::Fail => "FAIL",
        Verdict::Warn => "warn",
    };

    if !colorize {
        return word.to_owned();
    }

    match verdict {
        Verdict::Pass => word.green().to_string(),
        Verdict::Fail => word.red().to_string(),
        Verdict::Warn => word.yellow().to_string(),
    }
}
