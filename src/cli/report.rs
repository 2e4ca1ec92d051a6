//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style, route listings as an aligned table.
//! Kept apart from the core so the crate can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, ListSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    core::ResolvedRoute,
    issues::{Issue, Report, Severity},
    utils::{display_path, pluralize},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const ROUTE_TABLE_HEADERS: [&str; 4] = ["ROUTE", "PARAMS", "SEARCH", "FILE"];

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(routes_checked: usize) {
    print_success_to(routes_checked, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(routes_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            pluralize(routes_checked, "route")
        )
        .green()
    );
}

/// Print resolved routes as an aligned table followed by a count.
pub fn print_routes_to<W: Write>(summary: &ListSummary, writer: &mut W) {
    let mut routes: Vec<&ResolvedRoute> = summary.routes.iter().collect();
    routes.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then_with(|| a.absolute_path.cmp(&b.absolute_path))
    });

    let rows: Vec<[String; 4]> = routes
        .iter()
        .map(|route| {
            [
                route.path.clone(),
                route
                    .params
                    .as_ref()
                    .map(|p| p.join(", "))
                    .unwrap_or_else(|| "-".to_string()),
                if route.has_search_schema { "yes" } else { "-" }.to_string(),
                display_path(&route.absolute_path, &summary.root_dir),
            ]
        })
        .collect();

    if !rows.is_empty() {
        let widths = column_widths(&rows);
        let header = pad_row(&ROUTE_TABLE_HEADERS.map(String::from), &widths);
        let _ = writeln!(writer, "{}", header.bold());
        for row in &rows {
            let _ = writeln!(writer, "{}", pad_row(row, &widths));
        }
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Resolved {} ({} build)",
            pluralize(rows.len(), "route"),
            summary.build_output
        )
        .green()
    );
}

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::List(summary) if summary.json => {
            let json = serde_json::to_string_pretty(&summary.routes)
                .context("Failed to serialize routes")?;
            println!("{}", json);
        }
        CommandSummary::List(summary) => {
            print_routes_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.routes_checked);
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    if verbose && result.warning_count > 0 && result.error_count == 0 {
        eprintln!(
            "{} only warnings found, exiting with success",
            "note:".bold().cyan()
        );
    }

    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        pluralize(issues.len(), "problem"),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = ROUTE_TABLE_HEADERS.map(|h| UnicodeWidthStr::width(h));
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }
    widths
}

/// Left-align every cell but the last to its column width.
fn pad_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    let last = row.len() - 1;
    row.iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.clone()
            } else {
                let padding = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
                format!("{}{}", cell, " ".repeat(padding))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

// ============================================================
// Tests
// ============================================================
