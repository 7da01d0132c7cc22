//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, RemoveMessage},
    commands::{
        CleanSummary, CommandResult, CommandSummary, InitSummary, StatsSummary, TranslateSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, message key, location
/// and details.
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

    let gutter = line_number_width(&sorted);
    for issue in &sorted {
        print_issue(issue, writer, gutter);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalog_files: usize) {
    print_success_to(catalog_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalog_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, gutter: usize) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{severity}: \"{}\"  {}",
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    let arrow = "-->".blue();
    let _ = match issue.location() {
        ReportLocation::Message(ctx) => writeln!(
            writer,
            "  {arrow} {}:{}:{}",
            ctx.file_path(),
            ctx.line(),
            ctx.col()
        ),
        ReportLocation::File { path } => writeln!(writer, "  {arrow} {path}"),
    };

    let notes = [
        ("note:".bold(), issue.details()),
        ("hint:".bold().cyan(), issue.hint().map(str::to_owned)),
    ];
    for (label, text) in notes {
        if let Some(text) = text {
            let _ = writeln!(writer, "{:>gutter$} {} {label} {text}", "", "=".blue());
        }
    }

    let _ = writeln!(writer);
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({errors} {}, {warnings} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(errors, "error").red(),
        plural(warnings, "warning").yellow()
    );
}

/// Width of the largest line number, so `=` lines align under the arrow.
fn line_number_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line().to_string().len()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result, verbose);

    match &result.summary {
        CommandSummary::Check | CommandSummary::Clean(_) if result.issues.is_empty() => {
            print_success(result.catalog_files_checked);
        }
        CommandSummary::Check => {}
        _ => print_parse_warning(result.parse_error_count, verbose),
    }
}

fn print_command_output(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary);
        }
        CommandSummary::Translate(summary) => {
            print_translate(summary, verbose);
        }
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_clean(summary: &CleanSummary) {
    if !summary.is_apply {
        if !summary.duplicate_issues.is_empty() {
            RemoveMessage::preview(&summary.duplicate_issues);
        }
        if !summary.obsolete_issues.is_empty() {
            RemoveMessage::preview(&summary.obsolete_issues);
        }
    }

    let total = summary.duplicate_count + summary.obsolete_count;
    if total > 0 {
        if summary.is_apply {
            println!(
                "{} {} entry(s) in {} file(s) (processed {} issue(s)).",
                "Removed".green().bold(),
                summary.removed_count,
                summary.file_count,
                total
            );
            if summary.duplicate_count > 0 {
                println!("  - duplicate: {} entry(s)", summary.duplicate_count);
            }
            if summary.obsolete_count > 0 {
                println!("  - obsolete: {} entry(s)", summary.obsolete_count);
            }
        } else {
            println!(
                "{} {} entry(s) in {} file(s).",
                "Would remove".yellow().bold(),
                total,
                summary.file_count
            );
            println!("Run with {} to remove these entries.", "--apply".cyan());
        }
    }
}

fn print_translate(summary: &TranslateSummary, verbose: bool) {
    println!("{}", summary.text);

    if verbose {
        let mut stderr = io::stderr().lock();
        for file in &summary.installed {
            let _ = writeln!(stderr, "{} {}", "installed:".bold(), file);
        }
        if !summary.translated {
            let _ = writeln!(
                stderr,
                "{} no translation in {}, showing source text",
                "note:".bold(),
                summary.locale
            );
        }
    }
}

/// Print the coverage table. Columns are padded by display width so
/// non-ASCII paths line up.
pub fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "No catalog files found.");
        return;
    }

    let header = [
        "catalog", "locale", "messages", "finished", "unfinished", "obsolete", "lagging", "coverage",
    ];
    let rows: Vec<[String; 8]> = summary
        .catalogs
        .iter()
        .zip(&summary.lagging)
        .map(|(stats, lagging)| {
            [
                stats.file_path.clone(),
                stats.language.clone(),
                stats.messages.to_string(),
                stats.finished.to_string(),
                stats.unfinished.to_string(),
                stats.obsolete.to_string(),
                lagging.map_or_else(|| "-".to_string(), |n| n.to_string()),
                format!("{:.1}%", stats.coverage()),
            ]
        })
        .collect();

    let mut widths = header.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(writer, &header_cells, &widths, true);
    for row in &rows {
        write_row(writer, row, &widths, false);
    }
}

fn write_row<W: Write>(writer: &mut W, cells: &[String], widths: &[usize], bold: bool) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell.as_str())));
            // Text columns are left-aligned, counts right-aligned
            if i < 2 {
                format!("{cell}{padding}")
            } else {
                format!("{padding}{cell}")
            }
        })
        .collect();
    let line = line.join("  ");
    let line = line.trim_end();
    if bold {
        let _ = writeln!(writer, "{}", line.bold());
    } else {
        let _ = writeln!(writer, "{}", line);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
