use std::collections::HashSet;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_issues, empty_source::check_empty_source_issues,
        obsolete::check_obsolete_issues, orphan::check_orphan_issues,
        placeholder::check_placeholder_issues, replica_lag::check_replica_lag_issues,
        untranslated::check_untranslated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptySource,
    Placeholder,
    Untranslated,
    Duplicate,
    ReplicaLag,
    Orphan,
    Obsolete,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptySource,
            CheckRule::Placeholder,
            CheckRule::Untranslated,
            CheckRule::Duplicate,
            CheckRule::ReplicaLag,
            CheckRule::Orphan,
            CheckRule::Obsolete,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let mut checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };
    let mut seen = HashSet::new();
    checks.retain(|check| seen.insert(*check));

    Ok(finish(
        CommandSummary::Check,
        collect_issues(&ctx, &checks),
        ctx.files.len(),
        true,
    ))
}

/// Run the selected rules over a context. Parse errors are always included.
pub fn collect_issues(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::EmptySource => {
                let issues = check_empty_source_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptySource));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::ReplicaLag => {
                let issues = check_replica_lag_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::ReplicaLag));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Orphan));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    all_issues
}
