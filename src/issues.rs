//! Catalog issues.
//!
//! Every issue carries what the report needs to print it and what the
//! clean actions need to locate the entry in its file.

use std::{cmp::Ordering, fmt};

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, TranslationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Check rule that produced an issue. The declaration order is the
/// tie-breaker when two issues point at the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EmptySource,
    PlaceholderMismatch,
    ReplicaLag,
    Untranslated,
    Duplicate,
    Orphan,
    Obsolete,
    ParseError,
}

impl Rule {
    /// Errors break lookup or formatting at runtime and fail `tscat check`.
    /// Warnings are catalog hygiene.
    pub fn severity(self) -> Severity {
        match self {
            Rule::EmptySource | Rule::PlaceholderMismatch | Rule::ReplicaLag | Rule::ParseError => {
                Severity::Error
            }
            Rule::Untranslated | Rule::Duplicate | Rule::Orphan | Rule::Obsolete => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rule::EmptySource => "empty-source",
            Rule::PlaceholderMismatch => "placeholder-mismatch",
            Rule::ReplicaLag => "replica-lag",
            Rule::Untranslated => "untranslated",
            Rule::Duplicate => "duplicate",
            Rule::Orphan => "orphan",
            Rule::Obsolete => "obsolete",
            Rule::ParseError => "parse-error",
        })
    }
}

/// Message whose source string is empty or whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: MessageContext,
}

/// Translation whose placeholders differ from the source's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// The offending translation (or numerus form).
    pub translation: String,
    /// In the source, not in the translation.
    pub missing: Vec<String>,
    /// In the translation, not in the source.
    pub unexpected: Vec<String>,
}

/// Message in a non-primary catalog that still needs translating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub locale: String,
    /// Unfinished (has a draft) or Finished with empty text.
    pub state: TranslationState,
}

/// Entry shadowed by another entry with the same key in the same context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    /// Line of the entry lookup resolves to.
    pub kept_line: usize,
}

/// Key of the primary catalog missing from sibling catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaLagIssue {
    pub context: MessageContext,
    pub primary_locale: String,
    pub missing_in: Vec<String>,
}

/// Key of a non-primary catalog the primary catalog does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanIssue {
    pub context: MessageContext,
    pub locale: String,
}

/// Entry marked vanished or obsolete by lupdate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: MessageContext,
    pub state: TranslationState,
}

/// Catalog file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    ReplicaLag(ReplicaLagIssue),
    Untranslated(UntranslatedIssue),
    Duplicate(DuplicateIssue),
    Orphan(OrphanIssue),
    Obsolete(ObsoleteIssue),
    ParseError(ParseErrorIssue),
}

/// Where an issue points.
pub enum ReportLocation<'a> {
    /// A message inside a catalog file.
    Message(&'a MessageContext),
    /// The file as a whole.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    fn sort_key(&self) -> (&str, usize, usize) {
        match self {
            ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (*path, 0, 0),
        }
    }
}

/// What the cargo-style report prints for an issue.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    fn rule(&self) -> Rule;

    fn severity(&self) -> Severity {
        self.rule().severity()
    }

    /// Headline. Message issues show their key.
    fn message(&self) -> String {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.key.to_string(),
            ReportLocation::File { path } => path.to_string(),
        }
    }

    /// Text of the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Text of the "= help:" line.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::EmptySource
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "message in context \"{}\" has no source text",
            self.context.key.context
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::PlaceholderMismatch
    }

    fn details(&self) -> Option<String> {
        let missing = (!self.missing.is_empty()).then(|| format!("missing {}", self.missing.join(", ")));
        let unexpected = (!self.unexpected.is_empty())
            .then(|| format!("unexpected {}", self.unexpected.join(", ")));
        let what: Vec<String> = missing.into_iter().chain(unexpected).collect();
        Some(format!("(\"{}\") {}", self.translation, what.join("; ")))
    }

    fn hint(&self) -> Option<&str> {
        Some("translations must keep every placeholder of the source")
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::Untranslated
    }

    fn details(&self) -> Option<String> {
        Some(match self.context.value.as_str() {
            "" => format!("no translation in {}", self.locale),
            draft => format!("(\"{draft}\") {} in {}", self.state, self.locale),
        })
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::Duplicate
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") shadowed by the entry at line {}",
            self.context.value, self.kept_line
        ))
    }
}

impl Report for ReplicaLagIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::ReplicaLag
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }
}

impl Report for OrphanIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::Orphan
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn rule(&self) -> Rule {
        Rule::Obsolete
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked {}", self.state))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat clean --apply` to remove it")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }

    fn message(&self) -> String {
        self.error.clone()
    }
}

/// Reports list issues by file, then position, then rule.
impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location()
            .sort_key()
            .cmp(&other.location().sort_key())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
