//! File parsers for translation catalogs.
//!
//! - `ts`: Qt Linguist `.ts` XML reader

pub mod ts;

pub use ts::{looks_like_ts_catalog, parse_ts_file, parse_ts_str};
