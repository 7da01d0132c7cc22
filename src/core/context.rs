use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::Catalog,
        file_scanner::scan_files,
        locale::Locale,
        parsers::parse_ts_file,
    },
    issues::ParseErrorIssue,
};

/// Catalogs sharing one directory: the same strings in several locales
/// (`i18n/en.ts`, `i18n/es.ts`).
#[derive(Debug)]
pub struct Domain<'a> {
    pub dir: PathBuf,
    pub catalogs: Vec<&'a Catalog>,
}

impl<'a> Domain<'a> {
    /// The reference catalog of this domain: an exact locale match first,
    /// then any catalog of the primary language.
    pub fn primary(&self, primary_locale: &Locale) -> Option<&'a Catalog> {
        self.catalogs
            .iter()
            .find(|c| Locale::parse(&c.language).as_ref() == Some(primary_locale))
            .or_else(|| {
                self.catalogs
                    .iter()
                    .find(|c| is_primary_language(&c.language, primary_locale))
            })
            .copied()
    }
}

/// True if a catalog in `language` is written in the primary language.
pub fn is_primary_language(language: &str, primary_locale: &Locale) -> bool {
    Locale::parse(language).is_some_and(|locale| {
        locale.language == primary_locale.language
            && (primary_locale.region.is_none() || locale.region == primary_locale.region)
    })
}

/// Everything the rules and commands need: merged configuration and the
/// parsed catalog set.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory that was scanned.
    pub root_dir: PathBuf,

    /// Parsed form of `config.primary_locale`.
    pub primary_locale: Locale,

    /// All catalog files found, sorted.
    pub files: BTreeSet<String>,

    /// Source strings the untranslated rule skips (config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Catalogs that parsed, sorted by path.
    pub catalogs: Vec<Catalog>,

    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration, scans for catalogs and parses them in parallel.
    /// A catalog that fails to parse becomes a [`ParseErrorIssue`] instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the primary locale
    /// given on the command line is not a locale name.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        // Priority: CLI --source-root arg > current directory
        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let loaded = load_config(&search_dir)?;
        match &loaded.path {
            Some(path) => debug!("using config {}", path.display()),
            None => debug!("No .tscatrc.json found, using default configuration"),
        }

        let mut config = loaded.config;

        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        let primary_locale: Locale = config
            .primary_locale
            .parse()
            .with_context(|| anyhow!("Invalid primary locale: {:?}", config.primary_locale))?;

        let root_dir = match &common_args.source_root {
            Some(root) => root.clone(),
            None => PathBuf::from(&config.source_root),
        };
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let scan = scan_files(path, &config.includes, &config.ignores);
        debug!(
            files = scan.files.len(),
            skipped = scan.skipped_count,
            non_catalog = scan.non_catalog_count,
            "scanned {}",
            root_dir.display()
        );

        let results: Vec<_> = scan
            .files
            .par_iter()
            .map(|file| (file, parse_ts_file(Path::new(file))))
            .collect();

        let mut catalogs = Vec::new();
        let mut parse_errors = Vec::new();
        for (file, result) in results {
            match result {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    debug!("{}", e);
                    parse_errors.push(ParseErrorIssue {
                        file_path: file.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        catalogs.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            primary_locale,
            files: scan.files,
            ignore_texts,
            catalogs,
            parse_errors,
        })
    }

    /// Build a context over already parsed catalogs.
    pub fn from_catalogs(config: Config, catalogs: Vec<Catalog>) -> Result<Self> {
        let primary_locale = config.primary_locale.parse()?;
        let files = catalogs.iter().map(|c| c.file_path.clone()).collect();
        let ignore_texts = config.ignore_texts.iter().cloned().collect();
        let root_dir = PathBuf::from(&config.source_root);
        Ok(Self {
            config,
            root_dir,
            primary_locale,
            files,
            ignore_texts,
            catalogs,
            parse_errors: Vec::new(),
        })
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    /// Catalogs grouped by directory, in path order.
    pub fn domains(&self) -> Vec<Domain<'_>> {
        let mut by_dir: BTreeMap<PathBuf, Vec<&Catalog>> = BTreeMap::new();
        for catalog in &self.catalogs {
            let dir = Path::new(&catalog.file_path)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            by_dir.entry(dir).or_default().push(catalog);
        }
        by_dir
            .into_iter()
            .map(|(dir, catalogs)| Domain { dir, catalogs })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn catalog_xml(language: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="{language}">
<context>
    <name>Main</name>
    <message>
        <source>Help</source>
        <translation>Help</translation>
    </message>
</context>
</TS>
"#
        )
    }

    fn common_args(root: &Path) -> CommonArgs {
        CommonArgs {
            primary_locale: None,
            source_root: Some(root.to_path_buf()),
            verbose: false,
        }
    }

    fn catalog(path: &str, language: &str) -> Catalog {
        Catalog {
            file_path: path.to_string(),
            ..Catalog::new(language)
        }
    }

    #[test]
    fn test_new_parses_catalogs_and_collects_errors() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir_all(dir.path().join("i18n")).unwrap();
        fs::write(dir.path().join("i18n/en.ts"), catalog_xml("en")).unwrap();
        fs::write(dir.path().join("i18n/es.ts"), catalog_xml("es")).unwrap();
        fs::write(
            dir.path().join("i18n/fr.ts"),
            "<?xml version=\"1.0\"?>\n<TS language=\"fr\">\n<context>\n</context>\n</TS>\n",
        )
        .unwrap();

        let ctx = CheckContext::new(&common_args(dir.path())).unwrap();

        assert_eq!(ctx.files.len(), 3);
        assert_eq!(ctx.catalogs.len(), 2);
        assert_eq!(ctx.parse_errors().len(), 1);
        assert!(ctx.parse_errors()[0].file_path.ends_with("fr.ts"));
        assert_eq!(ctx.primary_locale, Locale::new("en", None));
    }

    #[test]
    fn test_cli_primary_locale_overrides_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(
            dir.path().join(".tscatrc.json"),
            r#"{ "primaryLocale": "en" }"#,
        )
        .unwrap();

        let mut args = common_args(dir.path());
        args.primary_locale = Some("es".to_string());
        let ctx = CheckContext::new(&args).unwrap();

        assert_eq!(ctx.config.primary_locale, "es");
        assert_eq!(ctx.primary_locale, Locale::new("es", None));
    }

    #[test]
    fn test_invalid_cli_primary_locale_is_an_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let mut args = common_args(dir.path());
        args.primary_locale = Some("english".to_string());
        assert!(CheckContext::new(&args).is_err());
    }

    #[test]
    fn test_domains_group_by_directory() {
        let ctx = CheckContext::from_catalogs(
            Config::default(),
            vec![
                catalog("./components/timer/i18n/es.ts", "es"),
                catalog("./i18n/en.ts", "en"),
                catalog("./i18n/es.ts", "es"),
            ],
        )
        .unwrap();

        let domains = ctx.domains();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].dir, PathBuf::from("./components/timer/i18n"));
        assert!(domains[0].primary(&ctx.primary_locale).is_none());
        assert_eq!(domains[1].catalogs.len(), 2);
        assert_eq!(
            domains[1].primary(&ctx.primary_locale).map(|c| c.language.as_str()),
            Some("en")
        );
    }

    #[test]
    fn test_domain_primary_prefers_exact_locale() {
        let en_us = catalog("./i18n/en_US.ts", "en_US");
        let en = catalog("./i18n/en.ts", "en");
        let domain = Domain {
            dir: PathBuf::from("./i18n"),
            catalogs: vec![&en_us, &en],
        };

        assert_eq!(
            domain.primary(&Locale::new("en", None)).map(|c| c.file_path.as_str()),
            Some("./i18n/en.ts")
        );
        assert_eq!(
            domain
                .primary(&Locale::new("en", Some("US")))
                .map(|c| c.file_path.as_str()),
            Some("./i18n/en_US.ts")
        );
    }

    #[test]
    fn test_is_primary_language() {
        let en = Locale::new("en", None);
        assert!(is_primary_language("en", &en));
        assert!(is_primary_language("en_US", &en));
        assert!(!is_primary_language("es", &en));
        assert!(!is_primary_language("en_US", &Locale::new("en", Some("GB"))));
    }
}
