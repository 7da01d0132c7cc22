//! Locale names and plural rules.
//!
//! Catalog files are named after their locale (`es.ts`, `es_CO.ts`) and
//! lookup walks from the most specific name to the bare language, the way
//! `QTranslator::load(QLocale, ...)` searches a directory.

use std::{fmt, str::FromStr};

use anyhow::{Result, bail};

/// Language plus optional region, e.g. `es_CO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// Lowercase ISO 639 code.
    pub language: String,
    /// Uppercase ISO 3166 code or UN M.49 number.
    pub region: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        }
    }

    /// Parse POSIX (`es_CO.UTF-8`, `de_DE@euro`) and BCP 47 (`zh-Hans-CN`)
    /// spellings. Script and variant subtags are dropped. `C` and `POSIX`
    /// mean English.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.split(['.', '@']).next().unwrap_or("").trim();
        if name.is_empty() {
            return None;
        }
        if name == "C" || name == "POSIX" {
            return Some(Self::new("en", None));
        }

        let mut parts = name.split(['_', '-']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let region = parts.find(|part| is_region(part));
        Some(Self::new(language, region))
    }

    /// Names to look for, most specific first: `["es_CO", "es"]`.
    pub fn candidates(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(2);
        if self.region.is_some() {
            names.push(self.to_string());
        }
        names.push(self.language.clone());
        names
    }
}

fn is_region(part: &str) -> bool {
    (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Locale::parse(s) {
            Some(locale) => Ok(locale),
            None => bail!("Invalid locale '{}'", s),
        }
    }
}

/// Pick the best of `available` locale names for `wanted`, trying
/// [`Locale::candidates`] in order. Returns the name as given.
pub fn best_match<'a, S: AsRef<str>>(wanted: &Locale, available: &'a [S]) -> Option<&'a str> {
    let parsed: Vec<(&str, Option<Locale>)> = available
        .iter()
        .map(|name| (name.as_ref(), Locale::parse(name.as_ref())))
        .collect();

    wanted.candidates().iter().find_map(|candidate| {
        parsed.iter().find_map(|(name, locale)| {
            locale
                .as_ref()
                .filter(|l| l.to_string() == *candidate)
                .map(|_| *name)
        })
    })
}

/// The user's locale as reported by the OS.
pub fn system_locale() -> Option<Locale> {
    sys_locale::get_locale().and_then(|name| Locale::parse(&name))
}

/// Index of the numerus form to use for `n` items.
///
/// Follows the plural families Qt Linguist assigns to languages: a single
/// form, English-style `n != 1`, French-style `n > 1`, and the three-form
/// Slavic rules.
pub fn plural_index(locale: &Locale, n: u64) -> usize {
    let language = locale.language.as_str();
    match language {
        "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "km" | "my" => 0,
        "fr" | "oc" | "tl" | "fil" => usize::from(n > 1),
        "pt" if locale.region.as_deref() == Some("BR") => usize::from(n > 1),
        "ru" | "uk" | "be" | "sr" | "hr" | "bs" => {
            if n % 10 == 1 && n % 100 != 11 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                1
            } else {
                2
            }
        }
        "pl" => {
            if n == 1 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                1
            } else {
                2
            }
        }
        "cs" | "sk" => match n {
            1 => 0,
            2..=4 => 1,
            _ => 2,
        },
        _ => usize::from(n != 1),
    }
}
