//! Catalog edits driven by check issues.
//!
//! `tscat clean` maps duplicate and obsolete issues to
//! [`Operation::RemoveMessage`] edits through [`RemoveMessage`]. Without
//! `--apply` the edits are only previewed; with it, every touched catalog
//! is parsed again, filtered and written back once.

mod operation;
mod remove_message;
mod traits;

pub use operation::Operation;
pub use remove_message::RemoveMessage;
pub(crate) use traits::execute_operations;
pub use traits::{Action, ActionStats};
