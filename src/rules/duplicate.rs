//! Duplicate message detection rule.
//!
//! lupdate keeps one entry per key, but hand-merged catalogs often end up
//! with the same source twice in one context, or a context repeated as a
//! second `<context>` block with the same name. Lookup resolves to one of them; the others are dead
//! weight and a source of confusion for translators.

use crate::{
    core::{
        Catalog, CheckContext,
        translator::{key_groups, select_preferred},
    },
    issues::DuplicateIssue,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    check_duplicates(&ctx.catalogs)
}

/// Report every live entry that lookup would never return because another
/// entry with the same key wins.
pub fn check_duplicates(catalogs: &[Catalog]) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (kept, shadowed) in shadowed_entries(catalog) {
            let kept_line = catalog.contexts[kept.0].messages[kept.1].line;
            issues.extend(shadowed.into_iter().map(|(c, m)| {
                let context = &catalog.contexts[c];
                DuplicateIssue {
                    context: catalog.message_context(context, &context.messages[m]),
                    kept_line,
                }
            }));
        }
    }

    issues
}

/// Group the live entries of a catalog by key, across every context with
/// the same name. For each key with more than one entry, returns the
/// position of the winning entry and the positions of the rest.
///
/// When no entry is resolvable (all empty), the last one is kept.
pub(crate) fn shadowed_entries(catalog: &Catalog) -> Vec<((usize, usize), Vec<(usize, usize)>)> {
    let message = |&(c, m): &(usize, usize)| &catalog.contexts[c].messages[m];

    key_groups(catalog)
        .into_iter()
        .filter_map(|(_, positions)| {
            let live: Vec<(usize, usize)> = positions
                .into_iter()
                .filter(|pos| !message(pos).state.is_obsolete())
                .collect();
            if live.len() < 2 {
                return None;
            }
            let kept = select_preferred(live.iter().enumerate().map(|(i, pos)| (i, message(pos))))
                .map(|i| live[i])
                .or_else(|| live.last().copied())?;
            let shadowed = live.into_iter().filter(|&pos| pos != kept).collect();
            Some((kept, shadowed))
        })
        .collect()
}
