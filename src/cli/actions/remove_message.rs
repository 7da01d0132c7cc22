//! RemoveMessage action.
//!
//! Removes shadowed duplicates and vanished entries from catalogs.
//! Used by the `tscat clean` command.

use crate::issues::{DuplicateIssue, ObsoleteIssue};

use super::operation::Operation;
use super::traits::Action;

/// Action to remove message entries from `.ts` files.
///
/// Supports:
/// - `DuplicateIssue`: entries lookup never resolves to
/// - `ObsoleteIssue`: entries marked vanished or obsolete
pub struct RemoveMessage;

impl Action<DuplicateIssue> for RemoveMessage {
    fn to_operations(issues: &[DuplicateIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::RemoveMessage {
                context: issue.context.clone(),
            })
            .collect()
    }
}

impl Action<ObsoleteIssue> for RemoveMessage {
    fn to_operations(issues: &[ObsoleteIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::RemoveMessage {
                context: issue.context.clone(),
            })
            .collect()
    }
}
