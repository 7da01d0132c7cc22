//! Rule implementations for tscat.
//!
//! This module contains pure functions that check parsed catalogs for
//! issues. Each `check_*` function takes only the inputs it needs and
//! returns a specific issue type; the `check_*_issues` wrappers pull those
//! inputs out of a [`crate::core::CheckContext`].
//!
//! ## Module Structure
//!
//! - `empty_source`: Messages without source text
//! - `placeholder`: Placeholder differences between source and translation
//! - `untranslated`: Unfinished or empty translations
//! - `duplicate`: Repeated keys within one context
//! - `replica_lag`: Keys missing in non-primary catalogs
//! - `orphan`: Keys in non-primary catalogs but not in the primary one
//! - `obsolete`: Vanished entries left in the catalog

pub mod duplicate;
pub mod empty_source;
pub mod obsolete;
pub mod orphan;
pub mod placeholder;
pub mod replica_lag;
pub mod untranslated;

use std::collections::HashSet;

use crate::core::{Catalog, MessageKey};

/// Keys of all live (not vanished or obsolete) messages of a catalog.
pub(crate) fn active_keys(catalog: &Catalog) -> HashSet<MessageKey> {
    catalog
        .messages()
        .filter(|(_, message)| !message.state.is_obsolete())
        .map(|(context, message)| message.key(&context.name))
        .collect()
}
