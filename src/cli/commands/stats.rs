use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{core::CheckContext, issues::Issue, rules::replica_lag::lag_counts};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let summary = collect_stats(&ctx);

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(summary),
        issues,
        ctx.files.len(),
        false,
    ))
}

/// Coverage per catalog, plus how many primary messages each one lacks
/// (`None` for primary catalogs and directories without one).
pub fn collect_stats(ctx: &CheckContext) -> StatsSummary {
    let lags = lag_counts(&ctx.domains(), &ctx.primary_locale);
    let catalogs: Vec<_> = ctx.catalogs.iter().map(|c| c.stats()).collect();
    let lagging = catalogs
        .iter()
        .map(|s| lags.get(&s.file_path).copied())
        .collect();
    StatsSummary { catalogs, lagging }
}
