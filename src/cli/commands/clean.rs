use std::collections::HashSet;

use super::super::{
    actions::{Action, ActionStats, RemoveMessage, execute_operations},
    args::{CleanCommand, CleanRule},
};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::{DuplicateIssue, Issue, ObsoleteIssue},
    rules::{duplicate::check_duplicate_issues, obsolete::check_obsolete_issues},
};
use anyhow::{Ok, Result};

impl CleanRule {
    pub fn all() -> HashSet<Self> {
        [Self::Duplicate, Self::Obsolete].into_iter().collect()
    }
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let rules = if args.rules.is_empty() {
        CleanRule::all()
    } else {
        args.rules.iter().copied().collect()
    };

    let mut duplicate_issues: Vec<DuplicateIssue> = Vec::new();
    let mut obsolete_issues: Vec<ObsoleteIssue> = Vec::new();

    for rule in rules {
        match rule {
            CleanRule::Duplicate => duplicate_issues.extend(check_duplicate_issues(&ctx)),
            CleanRule::Obsolete => obsolete_issues.extend(check_obsolete_issues(&ctx)),
        }
    }

    let duplicate_count = duplicate_issues.len();
    let obsolete_count = obsolete_issues.len();

    // Issues point at lines of the files as scanned: one rewrite per file.
    let (file_count, removed_count) = if apply {
        let mut ops = RemoveMessage::to_operations(&duplicate_issues);
        ops.extend(RemoveMessage::to_operations(&obsolete_issues));
        let stats: ActionStats = execute_operations(&ops)?;
        (stats.files_modified, stats.changes_applied)
    } else {
        let files: HashSet<&str> = duplicate_issues
            .iter()
            .map(|i| i.context.file_path())
            .chain(obsolete_issues.iter().map(|i| i.context.file_path()))
            .collect();
        (files.len(), 0)
    };

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(duplicate_issues.iter().cloned().map(Issue::Duplicate));
    all_issues.extend(obsolete_issues.iter().cloned().map(Issue::Obsolete));
    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            duplicate_count,
            obsolete_count,
            file_count,
            is_apply: apply,
            removed_count,
            duplicate_issues,
            obsolete_issues,
        }),
        all_issues,
        ctx.files.len(),
        false,
    ))
}
