//! In-memory model of a Qt Linguist `.ts` translation catalog.
//!
//! A catalog is an ordered list of contexts (one per UI class or component),
//! each holding an ordered list of messages. Order and duplicates are kept
//! exactly as they appear in the file; lookup policy lives in
//! [`crate::core::translator`].

use std::fmt;

use super::message::{MessageContext, MessageKey, MessageLocation};

/// State of a translation, taken from the `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TranslationState {
    /// No `type` attribute: the translator marked it done.
    #[default]
    Finished,
    /// `type="unfinished"`: needs review or not translated yet.
    Unfinished,
    /// `type="vanished"`: the source string no longer exists in the code.
    Vanished,
    /// `type="obsolete"`: legacy spelling of vanished.
    Obsolete,
}

impl TranslationState {
    /// Parse the `type` attribute value. Unknown values are treated as unfinished.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("") => TranslationState::Finished,
            Some("vanished") => TranslationState::Vanished,
            Some("obsolete") => TranslationState::Obsolete,
            Some(_) => TranslationState::Unfinished,
        }
    }

    /// Value of the `type` attribute, or `None` for finished translations.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationState::Finished => None,
            TranslationState::Unfinished => Some("unfinished"),
            TranslationState::Vanished => Some("vanished"),
            TranslationState::Obsolete => Some("obsolete"),
        }
    }

    /// True for entries whose source string has disappeared from the application.
    pub fn is_obsolete(&self) -> bool {
        matches!(self, TranslationState::Vanished | TranslationState::Obsolete)
    }
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationState::Finished => write!(f, "finished"),
            TranslationState::Unfinished => write!(f, "unfinished"),
            TranslationState::Vanished => write!(f, "vanished"),
            TranslationState::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// A plain translation.
    Single(String),
    /// One form per plural rule of the target language (`numerus="yes"`).
    Numerus(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Single(String::new())
    }
}

impl Translation {
    /// All translated strings (one for single messages, every form for numerus).
    pub fn forms(&self) -> &[String] {
        match self {
            Translation::Single(text) => std::slice::from_ref(text),
            Translation::Numerus(forms) => forms,
        }
    }

    /// First translated string, or "" when there is none.
    pub fn first(&self) -> &str {
        self.forms().first().map(String::as_str).unwrap_or("")
    }

    /// True if no form carries any text.
    pub fn is_empty(&self) -> bool {
        self.forms().iter().all(|f| f.is_empty())
    }

    /// True if at least one form is missing text.
    pub fn has_empty_form(&self) -> bool {
        let forms = self.forms();
        forms.is_empty() || forms.iter().any(|f| f.is_empty())
    }
}

/// Where a message's source string was found in the application sources.
///
/// Informational only: lookup never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub filename: String,
    pub line: Option<u32>,
}

impl Provenance {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// One source string with its translation and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub source: String,
    /// Disambiguation comment; part of the lookup key.
    pub comment: Option<String>,
    /// Note from the developer to the translator.
    pub extra_comment: Option<String>,
    /// Note written by the translator.
    pub translator_comment: Option<String>,
    /// Previous source text, kept by lupdate when the source changed.
    pub old_source: Option<String>,
    pub locations: Vec<Provenance>,
    pub translation: Translation,
    pub state: TranslationState,
    /// Line of the `<source>` element in the catalog file.
    pub line: usize,
    /// Column of the `<source>` element in the catalog file.
    pub col: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Single(translation.into()),
            ..Default::default()
        }
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    /// Disambiguation comment, or "" when absent.
    pub fn disambiguation(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// True if lookup may return this entry's translation.
    pub fn is_resolvable(&self) -> bool {
        !self.state.is_obsolete() && !self.translation.is_empty()
    }

    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, self.source.as_str(), self.disambiguation())
    }
}

/// A named group of messages, usually one window or widget class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
    /// Line of the `<context>` element in the catalog file.
    pub line: usize,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }
}

/// A parsed `.ts` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Path the catalog was read from ("" for in-memory catalogs).
    pub file_path: String,
    /// Target locale (`language` attribute, or file stem when missing).
    pub language: String,
    /// Locale of the source strings (`sourcelanguage` attribute).
    pub source_language: Option<String>,
    /// Format version (`version` attribute, e.g. "2.1").
    pub version: Option<String>,
    pub contexts: Vec<Context>,
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn with_contexts(mut self, contexts: Vec<Context>) -> Self {
        self.contexts = contexts;
        self
    }

    /// Iterate over `(context, message)` pairs in file order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Diagnostic view of one message of this catalog.
    pub fn message_context(&self, context: &Context, message: &Message) -> MessageContext {
        MessageContext::new(
            MessageLocation::new(&self.file_path, message.line, message.col),
            message.key(&context.name),
            message.translation.first(),
        )
    }

    /// Translation coverage figures for this catalog.
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            file_path: self.file_path.clone(),
            language: self.language.clone(),
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for (_, message) in self.messages() {
            stats.messages += 1;
            match message.state {
                TranslationState::Vanished | TranslationState::Obsolete => stats.obsolete += 1,
                TranslationState::Unfinished => stats.unfinished += 1,
                TranslationState::Finished if message.translation.has_empty_form() => {
                    stats.unfinished += 1
                }
                TranslationState::Finished => stats.finished += 1,
            }
        }
        stats
    }
}

/// Counts reported by `tscat stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub file_path: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    /// Share of active (non-obsolete) messages that are finished, in percent.
    pub fn coverage(&self) -> f64 {
        let active = self.messages - self.obsolete;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}
