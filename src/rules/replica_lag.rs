//! Replica lag detection rule.
//!
//! Detects messages that exist in the primary catalog of a directory but are
//! missing from one or more sibling catalogs. Those strings silently fall
//! back to the source text for users of the lagging locales.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{Catalog, CheckContext, Domain, Locale},
    issues::ReplicaLagIssue,
    rules::active_keys,
};

pub fn check_replica_lag_issues(ctx: &CheckContext) -> Vec<ReplicaLagIssue> {
    check_replica_lags(&ctx.domains(), &ctx.primary_locale)
}

/// Check for replica lag issues.
///
/// # Arguments
/// * `domains` - Catalogs grouped by directory
/// * `primary_locale` - Selects the reference catalog of each domain
///
/// Domains without a primary catalog are skipped. Vanished entries count
/// as absent on both sides.
pub fn check_replica_lags(domains: &[Domain], primary_locale: &Locale) -> Vec<ReplicaLagIssue> {
    let mut issues = Vec::new();

    for domain in domains {
        let Some(primary) = domain.primary(primary_locale) else {
            continue;
        };
        let replicas: Vec<(&Catalog, HashSet<_>)> = domain
            .catalogs
            .iter()
            .filter(|c| !std::ptr::eq(**c, primary))
            .map(|c| (*c, active_keys(c)))
            .collect();
        if replicas.is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        for (context, message) in primary.messages() {
            if message.state.is_obsolete() {
                continue;
            }
            let key = message.key(&context.name);
            if !seen.insert(key.clone()) {
                continue;
            }

            let mut missing_in: Vec<String> = replicas
                .iter()
                .filter(|(_, keys)| !keys.contains(&key))
                .map(|(catalog, _)| catalog.language.clone())
                .collect();
            if missing_in.is_empty() {
                continue;
            }
            missing_in.sort();
            missing_in.dedup();

            issues.push(ReplicaLagIssue {
                context: primary.message_context(context, message),
                primary_locale: primary.language.clone(),
                missing_in,
            });
        }
    }

    issues
}

/// Number of primary messages each replica catalog lacks, keyed by file path.
pub fn lag_counts(domains: &[Domain], primary_locale: &Locale) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for domain in domains {
        let Some(primary) = domain.primary(primary_locale) else {
            continue;
        };
        let primary_keys = active_keys(primary);
        for catalog in &domain.catalogs {
            if std::ptr::eq(*catalog, primary) {
                continue;
            }
            let keys = active_keys(catalog);
            let missing = primary_keys.iter().filter(|k| !keys.contains(*k)).count();
            counts.insert(catalog.file_path.clone(), missing);
        }
    }
    counts
}
