//! Placeholder scanning and substitution for `str.format`-style templates.
//!
//! Catalog strings use `{0}` (positional), `{name}` (named) and `{}`
//! (automatic numbering) placeholders. `{{` and `}}` are literal braces.
//! A format spec or conversion (`{0:>3}`, `{name!r}`) is accepted but does
//! not change the identity of the placeholder, and is not applied.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::LazyLock,
};

use regex::{Captures, Regex};

pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}!:]*)(?:![rsa])?(?::[^{}]*)?\}").unwrap()
});

/// A placeholder as written in a template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// `{}`
    Auto,
    /// `{0}`
    Index(usize),
    /// `{name}`
    Named(String),
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Auto => write!(f, "{{}}"),
            Placeholder::Index(i) => write!(f, "{{{}}}", i),
            Placeholder::Named(name) => write!(f, "{{{}}}", name),
        }
    }
}

impl Placeholder {
    fn from_field(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() {
            Placeholder::Auto
        } else if let Ok(index) = field.parse() {
            Placeholder::Index(index)
        } else {
            Placeholder::Named(field.to_string())
        }
    }
}

/// All placeholders of a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| Placeholder::from_field(m.as_str())))
        .collect()
}

/// What a translation must preserve from its source: how often each
/// positional and named placeholder occurs, plus the number of automatic
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderSignature {
    pub keys: BTreeMap<Placeholder, usize>,
    pub auto: usize,
}

impl PlaceholderSignature {
    pub fn of(template: &str) -> Self {
        let mut signature = Self::default();
        for placeholder in placeholders(template) {
            match placeholder {
                Placeholder::Auto => signature.auto += 1,
                other => *signature.keys.entry(other).or_default() += 1,
            }
        }
        signature
    }

    /// Occurrences in `self` that `other` lacks, rendered for display. A
    /// placeholder used twice here and once there is listed once.
    pub fn missing_from(&self, other: &Self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .keys
            .iter()
            .flat_map(|(placeholder, &count)| {
                let present = other.keys.get(placeholder).copied().unwrap_or(0);
                (present..count).map(move |_| placeholder.to_string())
            })
            .collect();
        if self.auto > other.auto {
            missing.extend((other.auto..self.auto).map(|_| Placeholder::Auto.to_string()));
        }
        missing
    }
}

pub fn placeholder_signature(template: &str) -> PlaceholderSignature {
    PlaceholderSignature::of(template)
}

/// Values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatArgs {
    pub positional: Vec<String>,
    pub named: HashMap<String, String>,
}

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Substitute placeholders. Placeholders without a matching argument are
/// left as written, so a missing argument never hides the text.
pub fn format(template: &str, args: &FormatArgs) -> String {
    let mut next_auto = 0;
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let whole = &caps[0];
            match whole {
                "{{" => return "{".to_string(),
                "}}" => return "}".to_string(),
                _ => {}
            }
            let value = match Placeholder::from_field(&caps[1]) {
                Placeholder::Auto => {
                    let value = args.positional.get(next_auto);
                    next_auto += 1;
                    value
                }
                Placeholder::Index(i) => args.positional.get(i),
                Placeholder::Named(name) => args.named.get(&name),
            };
            value.cloned().unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

/// Replace Qt's `%n` plural marker with the count.
pub fn substitute_count(template: &str, n: u64) -> String {
    template.replace("%n", &n.to_string())
}
