use anyhow::{Context as _, Result};
use tracing::debug;

use super::super::args::TranslateCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::{
    core::{
        CheckContext, FormatArgs, Locale, Translator, format,
        locale::{best_match, system_locale},
    },
    issues::Issue,
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    // Priority: --locale > system locale > primary locale
    let locale = match &cmd.locale {
        Some(name) => name
            .parse::<Locale>()
            .with_context(|| format!("Invalid --locale value: {name}"))?,
        None => system_locale().unwrap_or_else(|| ctx.primary_locale.clone()),
    };
    debug!(locale = %locale, "resolving");

    let translator = build_translator(&ctx, locale);
    let comment = cmd.comment.as_deref().unwrap_or("");

    let mut args = FormatArgs::new();
    for value in &cmd.args {
        args = args.arg(value.as_str());
    }
    for (name, value) in &cmd.named {
        args = args.named(name.as_str(), value.as_str());
    }

    let resolved = match cmd.count {
        Some(n) => translator.translate_plural(&cmd.context, &cmd.source, comment, n),
        None => translator
            .translate_disambiguated(&cmd.context, &cmd.source, comment)
            .to_string(),
    };

    let summary = TranslateSummary {
        text: format(&resolved, &args),
        locale: translator.locale().to_string(),
        installed: installed_files(&ctx, translator.locale()),
        translated: translator.is_translated(&cmd.context, &cmd.source, comment),
    };

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Translate(summary),
        issues,
        ctx.files.len(),
        false,
    ))
}

/// Install, per catalog directory, the catalog best matching `locale`.
///
/// Directories are installed in path order, so for a key present in two
/// directories the later path wins.
pub fn build_translator(ctx: &CheckContext, locale: Locale) -> Translator {
    let mut translator = Translator::new(locale);
    for catalog in matching_catalogs(ctx, translator.locale()) {
        translator.install(catalog.clone());
    }
    translator
}

fn installed_files(ctx: &CheckContext, locale: &Locale) -> Vec<String> {
    matching_catalogs(ctx, locale)
        .into_iter()
        .map(|c| c.file_path.clone())
        .collect()
}

fn matching_catalogs<'a>(ctx: &'a CheckContext, locale: &Locale) -> Vec<&'a crate::core::Catalog> {
    ctx.domains()
        .into_iter()
        .filter_map(|domain| {
            let languages: Vec<&str> = domain.catalogs.iter().map(|c| c.language.as_str()).collect();
            let language = best_match(locale, &languages)?;
            domain
                .catalogs
                .iter()
                .find(|c| c.language == language)
                .copied()
        })
        .collect()
}
