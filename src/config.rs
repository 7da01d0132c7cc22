//! `.tscatrc.json` loading.
//!
//! The file is looked up from the scan directory upwards and stops at the
//! repository root (a directory holding `.git`). Every key is optional.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::Locale;

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Glob patterns of paths never scanned.
    pub ignores: Vec<String>,
    /// Directories to scan. Empty means the whole source root.
    pub includes: Vec<String>,
    /// Source strings that are the same in every language (product names,
    /// URLs). The untranslated rule skips them.
    pub ignore_texts: Vec<String>,
    /// Language the sources are written in.
    pub primary_locale: String,
    pub source_root: String,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".into(), "**/target/**".into()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: vec![],
            ignore_texts: vec![],
            primary_locale: "en".into(),
            source_root: "./".into(),
        }
    }
}

impl Config {
    /// Reject patterns the scanner could not compile and a primary locale
    /// that is not a locale name.
    pub fn validate(&self) -> Result<()> {
        let globs = self.ignores.iter().map(|p| ("ignores", p)).chain(
            self.includes
                .iter()
                // an include without wildcards is a literal directory
                .filter(|p| p.contains(['*', '?']))
                .map(|p| ("includes", p)),
        );
        for (key, pattern) in globs {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{key}': \"{pattern}\""))?;
        }

        if Locale::parse(&self.primary_locale).is_none() {
            bail!(
                "Invalid locale in 'primaryLocale': \"{}\"",
                self.primary_locale
            );
        }
        Ok(())
    }
}

/// Contents written by `tscat init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// A loaded configuration and the file it came from.
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when no config file was found and defaults are in use.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<LoadedConfig> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(LoadedConfig {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        path: Some(path),
    })
}
