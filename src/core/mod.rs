//! Catalog engine: model, parsing, lookup and the check context.
//!
//! ## Module Structure
//!
//! - `data`: catalog model and diagnostic positions
//! - `parsers`: `.ts` reader
//! - `writer`: `.ts` serializer
//! - `format`: placeholder scanning and substitution
//! - `locale`: locale names and plural rules
//! - `translator`: runtime lookup with fallback
//! - `file_scanner`: catalog discovery
//! - `context`: `CheckContext`, shared by rules and commands

pub mod context;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod format;
pub mod locale;
pub mod parsers;
pub mod translator;
pub mod writer;

pub use context::{CheckContext, Domain};
pub use data::*;
pub use error::CatalogError;
pub use format::{FormatArgs, format};
pub use locale::Locale;
pub use translator::Translator;
