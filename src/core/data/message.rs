use std::fmt;

/// Position of a message inside a `.ts` catalog file.
///
/// Points at the `<source>` element of the message, which is the line a
/// translator would edit first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./i18n/es.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// Lookup key of a message: `(context, source, disambiguation)`.
///
/// Two messages with the same source text in the same context are only
/// distinct when their disambiguation comments differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    /// Disambiguation comment (`<comment>`); empty when absent.
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}: {}", self.context, self.source)
        } else {
            write!(f, "{}: {} ({})", self.context, self.source, self.comment)
        }
    }
}

/// A message as seen by diagnostics: where it is and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    pub key: MessageKey,
    /// The translation text (first numerus form for plural messages).
    pub value: String,
}

impl MessageContext {
    pub fn new(location: MessageLocation, key: MessageKey, value: impl Into<String>) -> Self {
        Self {
            location,
            key,
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
