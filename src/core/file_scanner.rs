//! Catalog discovery.
//!
//! Walks the source root (or the configured include directories) and keeps
//! every `.ts` file whose head looks like a Qt Linguist catalog. TypeScript
//! sources share the extension and are counted, not returned.

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::parsers::looks_like_ts_catalog;

/// Bytes read from each `.ts` file to tell catalogs from TypeScript.
const SNIFF_LEN: u64 = 1024;

/// Patterns without `*` or `?` are literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: BTreeSet<String>,
    /// Entries that could not be read.
    pub skipped_count: usize,
    /// `.ts` files that turned out to be TypeScript sources.
    pub non_catalog_count: usize,
}

/// Compiled `ignores` configuration.
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, patterns: &[String]) -> Self {
        let mut set = Self {
            prefixes: Vec::new(),
            globs: Vec::new(),
        };
        for raw in patterns {
            if !is_glob_pattern(raw) {
                set.prefixes.push(base_dir.join(raw));
                continue;
            }
            match Pattern::new(raw) {
                Ok(pattern) => set.globs.push(pattern),
                Err(e) => warn!("Invalid ignore pattern '{raw}': {e}"),
            }
        }
        set
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.globs.iter().any(|pattern| pattern.matches_path(path))
    }
}

/// Directories the walk starts from.
fn scan_roots(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if !is_glob_pattern(include) {
            if path.exists() {
                roots.push(path);
            } else {
                warn!("Include path does not exist: {}", path.display());
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(matches) => roots.extend(matches.flatten().filter(|m| m.is_dir())),
            Err(e) => warn!("Invalid glob pattern '{include}': {e}"),
        }
    }
    roots
}

pub fn scan_files(base_dir: &str, includes: &[String], ignore_patterns: &[String]) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignores = IgnoreSet::new(base_dir, ignore_patterns);
    let mut result = ScanResult {
        files: BTreeSet::new(),
        skipped_count: 0,
        non_catalog_count: 0,
    };

    for root in scan_roots(base_dir, includes) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry: &DirEntry| !ignores.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    result.skipped_count += 1;
                    warn!("Cannot access path: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !has_catalog_extension(path) {
                continue;
            }

            match is_catalog_file(path) {
                Ok(true) => {
                    result.files.insert(path.to_string_lossy().into_owned());
                }
                Ok(false) => {
                    result.non_catalog_count += 1;
                    debug!("Skipping non-catalog file: {}", path.display());
                }
                Err(e) => {
                    result.skipped_count += 1;
                    warn!("Cannot read {}: {e}", path.display());
                }
            }
        }
    }

    result
}

fn has_catalog_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "ts")
}

fn is_catalog_file(path: &Path) -> io::Result<bool> {
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
    Ok(looks_like_ts_catalog(&String::from_utf8_lossy(&head)))
}
