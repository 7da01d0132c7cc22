//! Placeholder consistency rule.
//!
//! A translation must reference the same positional and named placeholders
//! as its source, each as many times, and the same number of automatic `{}`
//! ones. Order may
//! differ (translations reorder words); `%n` is left to the plural rules.

use crate::{
    core::{Catalog, CheckContext, format::placeholder_signature},
    issues::PlaceholderMismatchIssue,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholders(&ctx.catalogs)
}

/// Compare the placeholders of every non-empty translation (each numerus
/// form separately) with those of its source.
pub fn check_placeholders(catalogs: &[Catalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in catalog.messages() {
            if message.state.is_obsolete() {
                continue;
            }
            let expected = placeholder_signature(&message.source);

            for form in message.translation.forms() {
                if form.is_empty() {
                    continue;
                }
                let actual = placeholder_signature(form);
                if actual == expected {
                    continue;
                }
                issues.push(PlaceholderMismatchIssue {
                    context: catalog.message_context(context, message),
                    translation: form.clone(),
                    missing: expected.missing_from(&actual),
                    unexpected: actual.missing_from(&expected),
                });
            }
        }
    }

    issues
}
