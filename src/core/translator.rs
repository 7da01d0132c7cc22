//! Runtime lookup over installed catalogs.
//!
//! A [`Translator`] holds the catalogs of one locale (typically the
//! application catalog plus one per component). Catalogs are searched from
//! the most recently installed to the first, and a missing translation
//! falls back to the source text.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::core::{
    data::{Catalog, Message, MessageKey, Translation, TranslationState},
    error::CatalogError,
    format::{FormatArgs, format, substitute_count},
    locale::{Locale, best_match, plural_index},
    parsers::parse_ts_file,
};

/// Pick the entry lookup resolves to among entries sharing one key.
///
/// Only resolvable entries qualify. A finished translation beats an
/// unfinished one; among equals the later entry wins.
pub(crate) fn select_preferred<'a, I>(entries: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'a Message)>,
{
    entries
        .into_iter()
        .filter(|(_, message)| message.is_resolvable())
        .max_by_key(|(index, message)| (is_finished(message), *index))
        .map(|(index, _)| index)
}

fn is_finished(message: &Message) -> bool {
    message.state == TranslationState::Finished && !message.translation.has_empty_form()
}

struct InstalledCatalog {
    catalog: Catalog,
    /// Plural rules come from the catalog's own language.
    locale: Locale,
    /// Key -> (context index, message index) of the preferred entry.
    index: HashMap<MessageKey, (usize, usize)>,
}

/// Positions `(context index, message index)` of every entry of a catalog,
/// grouped by key in order of first appearance. Contexts sharing a name
/// (concatenated revisions) share their keys.
pub(crate) fn key_groups(catalog: &Catalog) -> Vec<(MessageKey, Vec<(usize, usize)>)> {
    let mut slots: HashMap<MessageKey, usize> = HashMap::new();
    let mut groups: Vec<(MessageKey, Vec<(usize, usize)>)> = Vec::new();
    for (ctx_idx, context) in catalog.contexts.iter().enumerate() {
        for (msg_idx, message) in context.messages.iter().enumerate() {
            let key = message.key(&context.name);
            let slot = *slots.entry(key.clone()).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push((ctx_idx, msg_idx));
        }
    }
    groups
}

impl InstalledCatalog {
    fn new(catalog: Catalog, fallback_locale: &Locale) -> Self {
        let index = key_groups(&catalog)
            .into_iter()
            .filter_map(|(key, positions)| {
                let entries = positions
                    .iter()
                    .enumerate()
                    .map(|(i, &(c, m))| (i, &catalog.contexts[c].messages[m]));
                select_preferred(entries).map(|i| (key, positions[i]))
            })
            .collect();

        let locale = Locale::parse(&catalog.language).unwrap_or_else(|| fallback_locale.clone());
        Self {
            catalog,
            locale,
            index,
        }
    }

    fn find(&self, key: &MessageKey) -> Option<&Message> {
        self.index
            .get(key)
            .map(|&(c, m)| &self.catalog.contexts[c].messages[m])
    }
}

/// Installed catalogs for one locale.
pub struct Translator {
    locale: Locale,
    catalogs: Vec<InstalledCatalog>,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            catalogs: Vec::new(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.len()
    }

    /// Install a catalog. It takes precedence over everything installed before.
    pub fn install(&mut self, catalog: Catalog) {
        debug!(
            file = %catalog.file_path,
            language = %catalog.language,
            messages = catalog.message_count(),
            "installing catalog"
        );
        self.catalogs.push(InstalledCatalog::new(catalog, &self.locale));
    }

    /// Find the catalog in `dir` that best matches the translator's locale
    /// (`es_CO.ts`, then `es.ts`) and install it.
    ///
    /// Returns the installed file, or `None` when the directory has no
    /// matching catalog.
    pub fn load_dir(&mut self, dir: &Path) -> Result<Option<PathBuf>, CatalogError> {
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_string_lossy().to_string(),
            source,
        })?;

        let mut stems: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "ts"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        stems.sort();

        let Some(stem) = best_match(&self.locale, &stems) else {
            debug!(dir = %dir.display(), locale = %self.locale, "no catalog for locale");
            return Ok(None);
        };

        let path = dir.join(format!("{stem}.ts"));
        let catalog = parse_ts_file(&path)?;
        self.install(catalog);
        Ok(Some(path))
    }

    fn find(&self, key: &MessageKey) -> Option<(&InstalledCatalog, &Message)> {
        self.catalogs
            .iter()
            .rev()
            .find_map(|installed| installed.find(key).map(|message| (installed, message)))
    }

    /// Exact key first, then the same source without disambiguation.
    fn lookup(
        &self,
        context: &str,
        source: &str,
        comment: &str,
    ) -> Option<(&InstalledCatalog, &Message)> {
        self.find(&MessageKey::new(context, source, comment))
            .or_else(|| {
                if comment.is_empty() {
                    None
                } else {
                    self.find(&MessageKey::new(context, source, ""))
                }
            })
    }

    /// True if lookup resolves to a translation rather than the source.
    pub fn is_translated(&self, context: &str, source: &str, comment: &str) -> bool {
        self.lookup(context, source, comment).is_some()
    }

    /// Translated text for `(context, source)`, or `source` itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, "")
    }

    /// Like [`Translator::translate`], for messages carrying a
    /// disambiguation comment.
    pub fn translate_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        match self.lookup(context, source, comment) {
            Some((_, message)) => message.translation.first(),
            None => source,
        }
    }

    /// Plural-aware lookup. Picks the numerus form for `n` under the
    /// catalog's plural rules and replaces `%n` with `n`.
    pub fn translate_plural(&self, context: &str, source: &str, comment: &str, n: u64) -> String {
        let text = match self.lookup(context, source, comment) {
            Some((installed, message)) => match &message.translation {
                Translation::Single(text) => text.as_str(),
                Translation::Numerus(forms) => {
                    let index = plural_index(&installed.locale, n).min(forms.len().saturating_sub(1));
                    forms.get(index).map(String::as_str).unwrap_or("")
                }
            },
            None => source,
        };
        let text = if text.is_empty() { source } else { text };
        substitute_count(text, n)
    }

    /// Look up and substitute placeholders.
    pub fn tr(&self, context: &str, source: &str, args: &FormatArgs) -> String {
        format(self.translate(context, source), args)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::core::data::Context;

    fn message(source: &str, translation: &str, state: TranslationState) -> Message {
        Message {
            state,
            ..Message::new(source, translation)
        }
    }

    fn catalog(language: &str, context: &str, messages: Vec<Message>) -> Catalog {
        Catalog::new(language).with_contexts(vec![Context::new(context).with_messages(messages)])
    }

    fn spanish() -> Translator {
        Translator::new(Locale::new("es", None))
    }

    #[test]
    fn test_translate_and_fallback() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "AboutDialog",
            vec![message("About {0}", "Acerca de {0}", TranslationState::Finished)],
        ));

        assert_eq!(translator.translate("AboutDialog", "About {0}"), "Acerca de {0}");
        assert_eq!(translator.translate("AboutDialog", "Close"), "Close");
        assert_eq!(translator.translate("Other", "About {0}"), "About {0}");
    }

    #[test]
    fn test_unfinished_translation_still_resolves() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "Form",
            vec![message("Raids", "Raids", TranslationState::Unfinished)],
        ));
        assert_eq!(translator.translate("Form", "Raids"), "Raids");
    }

    #[test]
    fn test_empty_and_vanished_entries_fall_back() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "Form",
            vec![
                message("Save", "", TranslationState::Unfinished),
                message("Port", "Puerto", TranslationState::Vanished),
            ],
        ));
        assert_eq!(translator.translate("Form", "Save"), "Save");
        assert_eq!(translator.translate("Form", "Port"), "Port");
        assert!(!translator.is_translated("Form", "Save", ""));
        assert!(!translator.is_translated("Form", "Port", ""));
    }

    #[test]
    fn test_duplicates_prefer_finished_then_latest() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "AutoShoutOut",
            vec![
                message("Add", "Agregar", TranslationState::Finished),
                message("Add", "Añadir", TranslationState::Finished),
                message("Delete", "Eliminar", TranslationState::Finished),
                message("Delete", "Borrar", TranslationState::Unfinished),
            ],
        ));
        assert_eq!(translator.translate("AutoShoutOut", "Add"), "Añadir");
        assert_eq!(translator.translate("AutoShoutOut", "Delete"), "Eliminar");
    }

    #[test]
    fn test_last_installed_catalog_wins() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "Form",
            vec![
                message("Enabled", "Habilitado", TranslationState::Finished),
                message("Delay", "Retraso", TranslationState::Finished),
            ],
        ));
        translator.install(catalog(
            "es",
            "Form",
            vec![message("Enabled", "Activado", TranslationState::Finished)],
        ));

        assert_eq!(translator.catalog_count(), 2);
        assert_eq!(translator.translate("Form", "Enabled"), "Activado");
        assert_eq!(translator.translate("Form", "Delay"), "Retraso");
    }

    #[test]
    fn test_disambiguation_falls_back_to_plain_key() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "Main",
            vec![
                Message {
                    comment: Some("menu".to_string()),
                    ..Message::new("Open", "Abrir")
                },
                Message::new("Close", "Cerrar"),
            ],
        ));

        assert_eq!(translator.translate_disambiguated("Main", "Open", "menu"), "Abrir");
        assert_eq!(translator.translate("Main", "Open"), "Open");
        assert_eq!(translator.translate_disambiguated("Main", "Close", "button"), "Cerrar");
    }

    #[test]
    fn test_translate_plural() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "Timer",
            vec![Message {
                translation: Translation::Numerus(vec![
                    "%n minuto".to_string(),
                    "%n minutos".to_string(),
                ]),
                ..Message::new("%n minute(s)", "")
            }],
        ));

        assert_eq!(translator.translate_plural("Timer", "%n minute(s)", "", 1), "1 minuto");
        assert_eq!(translator.translate_plural("Timer", "%n minute(s)", "", 3), "3 minutos");
        assert_eq!(translator.translate_plural("Timer", "%n second(s)", "", 3), "3 second(s)");
    }

    #[test]
    fn test_translate_plural_clamps_missing_forms() {
        let mut translator = Translator::new(Locale::new("ru", None));
        translator.install(catalog(
            "ru",
            "Timer",
            vec![Message {
                translation: Translation::Numerus(vec!["%n минута".to_string(), "%n минуты".to_string()]),
                ..Message::new("%n minute(s)", "")
            }],
        ));
        assert_eq!(translator.translate_plural("Timer", "%n minute(s)", "", 5), "5 минуты");
    }

    #[test]
    fn test_tr_formats_after_lookup() {
        let mut translator = spanish();
        translator.install(catalog(
            "es",
            "AutoShoutOut",
            vec![message(
                "Follow {name}, https://twitch.tv/{login}",
                "Sigue a {name}, https://twitch.tv/{login}",
                TranslationState::Finished,
            )],
        ));

        let args = FormatArgs::new().named("name", "Edo").named("login", "edo");
        assert_eq!(
            translator.tr("AutoShoutOut", "Follow {name}, https://twitch.tv/{login}", &args),
            "Sigue a Edo, https://twitch.tv/edo"
        );
        assert_eq!(
            translator.tr("AutoShoutOut", "Hi {name}", &args),
            "Hi Edo"
        );
    }

    #[test]
    fn test_load_dir_prefers_region() {
        let dir = tempdir().unwrap();
        let write = |name: &str, language: &str, text: &str| {
            fs::write(
                dir.path().join(name),
                format!(
                    r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="{language}">
<context>
    <name>Main</name>
    <message>
        <source>Help</source>
        <translation>{text}</translation>
    </message>
</context>
</TS>
"#
                ),
            )
            .unwrap();
        };
        write("en.ts", "en", "Help");
        write("es.ts", "es", "Ayuda");
        write("es_CO.ts", "es_CO", "Ayudita");

        let mut translator = Translator::new(Locale::new("es", Some("CO")));
        let loaded = translator.load_dir(dir.path()).unwrap();
        assert_eq!(loaded, Some(dir.path().join("es_CO.ts")));
        assert_eq!(translator.translate("Main", "Help"), "Ayudita");

        let mut translator = Translator::new(Locale::new("fr", None));
        assert_eq!(translator.load_dir(dir.path()).unwrap(), None);
        assert_eq!(translator.translate("Main", "Help"), "Help");
    }

    #[test]
    fn test_translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
