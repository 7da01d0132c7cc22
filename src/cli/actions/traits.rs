//! Action trait definition.
//!
//! An action turns issues of one type into catalog edits. One action type
//! may implement [`Action`] for several issue types.

use anyhow::Result;

use super::operation::Operation;

/// What an applied action changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Messages removed from catalogs.
    pub changes_applied: usize,
    /// Catalog files rewritten.
    pub files_modified: usize,
}

pub trait Action<I> {
    /// Map issues to catalog edits.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Print the edits without touching any file (`--apply` not given).
    fn preview(issues: &[I]) {
        Self::to_operations(issues)
            .iter()
            .for_each(Operation::preview);
    }
}

/// Apply edits from any number of actions together, so every catalog is
/// parsed and rewritten once. This is how `clean --apply` runs actions.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let removed = Operation::apply_all(ops)?;
    Ok(ActionStats {
        changes_applied: removed.values().sum(),
        files_modified: removed.len(),
    })
}
