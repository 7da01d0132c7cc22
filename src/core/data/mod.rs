//! Core data types shared by parsing, lookup, and validation.
//!
//! ## Module Structure
//!
//! - `catalog`: the catalog model (Catalog, Context, Message, Translation)
//! - `message`: diagnostic positions and keys (MessageLocation, MessageKey, MessageContext)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, CatalogStats, Context, Message, Provenance, Translation, TranslationState,
};
pub use message::{MessageContext, MessageKey, MessageLocation};
