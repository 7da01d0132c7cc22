//! Untranslated message detection rule.
//!
//! Reports messages of non-primary catalogs that are still marked
//! unfinished or carry no translated text. Primary-language catalogs are
//! skipped: their source text is already the translation.

use std::collections::HashSet;

use crate::{
    core::{
        Catalog, CheckContext, Locale, TranslationState, context::is_primary_language,
        format::PLACEHOLDER_REGEX,
    },
    issues::UntranslatedIssue,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    check_untranslated(&ctx.catalogs, &ctx.primary_locale, &ctx.ignore_texts)
}

/// Check for untranslated messages.
///
/// # Arguments
/// * `catalogs` - All parsed catalogs
/// * `primary_locale` - Catalogs in this language are not checked
/// * `ignore_texts` - Source strings that need no translation
pub fn check_untranslated(
    catalogs: &[Catalog],
    primary_locale: &Locale,
    ignore_texts: &HashSet<String>,
) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        if is_primary_language(&catalog.language, primary_locale) {
            continue;
        }

        for (context, message) in catalog.messages() {
            if message.state.is_obsolete() {
                continue;
            }
            if !has_words(&message.source) || ignore_texts.contains(&message.source) {
                continue;
            }
            let needs_work = message.state == TranslationState::Unfinished
                || message.translation.has_empty_form();
            if needs_work {
                issues.push(UntranslatedIssue {
                    context: catalog.message_context(context, message),
                    locale: catalog.language.clone(),
                    state: message.state,
                });
            }
        }
    }

    issues
}

/// Numbers, symbols and bare placeholders read the same in every language.
fn has_words(source: &str) -> bool {
    PLACEHOLDER_REGEX
        .replace_all(source, "")
        .chars()
        .any(char::is_alphabetic)
}
