//! Orphan message detection rule.
//!
//! Detects messages that exist in non-primary catalogs but not in the
//! primary catalog of the same directory. These are usually leftovers of
//! strings removed from the application but never pruned by lupdate.

use crate::{
    core::{CheckContext, Domain, Locale},
    issues::OrphanIssue,
    rules::active_keys,
};

pub fn check_orphan_issues(ctx: &CheckContext) -> Vec<OrphanIssue> {
    check_orphans(&ctx.domains(), &ctx.primary_locale)
}

/// Check for orphan messages.
///
/// Domains without a primary catalog are skipped, as are vanished entries
/// (the obsolete rule reports those).
pub fn check_orphans(domains: &[Domain], primary_locale: &Locale) -> Vec<OrphanIssue> {
    let mut issues = Vec::new();

    for domain in domains {
        let Some(primary) = domain.primary(primary_locale) else {
            continue;
        };
        let primary_keys = active_keys(primary);

        for catalog in &domain.catalogs {
            if std::ptr::eq(*catalog, primary) {
                continue;
            }
            issues.extend(
                catalog
                    .messages()
                    .filter(|(_, message)| !message.state.is_obsolete())
                    .filter(|(context, message)| {
                        !primary_keys.contains(&message.key(&context.name))
                    })
                    .map(|(context, message)| OrphanIssue {
                        context: catalog.message_context(context, message),
                        locale: catalog.language.clone(),
                    }),
            );
        }
    }

    issues
}
