//! tscat - toolkit for Qt Linguist translation catalogs
//!
//! tscat is a CLI tool and library for `.ts` translation catalogs. It
//! parses catalogs into a typed model, resolves strings with fallback to
//! the source text, substitutes placeholders, and checks catalog trees for
//! issues such as empty sources, placeholder mismatches and missing
//! translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog engine (model, parser, writer, lookup)
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic log setup
//! - `rules`: Detection rules for catalog issues
//!
//! ## Example
//!
//! ```
//! use tscat::core::{FormatArgs, Locale, Translator, parsers::parse_ts_str};
//!
//! let catalog = parse_ts_str(
//!     r#"<?xml version="1.0" encoding="utf-8"?>
//! <!DOCTYPE TS>
//! <TS version="2.1" language="es">
//! <context>
//!     <name>AboutDialog</name>
//!     <message>
//!         <source>About {0}</source>
//!         <translation>Acerca de {0}</translation>
//!     </message>
//! </context>
//! </TS>
//! "#,
//!     "i18n/es.ts",
//! )
//! .unwrap();
//!
//! let mut translator = Translator::new(Locale::new("es", None));
//! translator.install(catalog);
//!
//! assert_eq!(
//!     translator.tr("AboutDialog", "About {0}", &FormatArgs::new().arg("EdoBot")),
//!     "Acerca de EdoBot"
//! );
//! assert_eq!(translator.translate("AboutDialog", "Close"), "Close");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
