//! Empty source detection rule.
//!
//! Every message must carry source text: it is both the lookup key and
//! the fallback shown when no translation exists.

use crate::{
    core::{Catalog, CheckContext},
    issues::EmptySourceIssue,
};

pub fn check_empty_source_issues(ctx: &CheckContext) -> Vec<EmptySourceIssue> {
    check_empty_source(&ctx.catalogs)
}

/// Find messages whose source is empty or whitespace only.
pub fn check_empty_source(catalogs: &[Catalog]) -> Vec<EmptySourceIssue> {
    catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(_, message)| message.source.trim().is_empty())
                .map(|(context, message)| EmptySourceIssue {
                    context: catalog.message_context(context, message),
                })
        })
        .collect()
}
