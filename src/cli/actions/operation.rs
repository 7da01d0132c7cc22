//! Low-level catalog edits.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::core::{MessageContext, MessageKey, parsers::parse_ts_file, writer::write_ts_file};

/// Where a message to remove starts, and what it is. Several messages can
/// share a line in hand-merged catalogs.
type Target = (usize, usize, MessageKey);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Drop the message whose `<source>` sits at `context.location`.
    RemoveMessage { context: MessageContext },
}

impl Operation {
    pub fn context(&self) -> &MessageContext {
        match self {
            Operation::RemoveMessage { context } => context,
        }
    }

    /// Print what the operation would do.
    pub fn preview(&self) {
        match self {
            Operation::RemoveMessage { context } => {
                println!(
                    "  {} {}:{}  \"{}\"",
                    "remove".red(),
                    context.file_path(),
                    context.line(),
                    context.key
                );
            }
        }
    }

    /// Apply all operations, rewriting each touched catalog once.
    ///
    /// Returns the number of messages removed per file. Files whose
    /// operations match nothing (already edited) are left untouched.
    pub fn apply_all(ops: &[Operation]) -> Result<BTreeMap<String, usize>> {
        let mut by_file: BTreeMap<&str, BTreeSet<Target>> = BTreeMap::new();
        for op in ops {
            let Operation::RemoveMessage { context } = op;
            by_file.entry(context.file_path()).or_default().insert((
                context.line(),
                context.col(),
                context.key.clone(),
            ));
        }

        let mut removed = BTreeMap::new();
        for (file_path, targets) in by_file {
            let count = remove_messages(Path::new(file_path), &targets)
                .with_context(|| format!("Failed to clean {}", file_path))?;
            if count > 0 {
                removed.insert(file_path.to_string(), count);
            }
        }
        Ok(removed)
    }
}

/// Remove the messages matching `targets` by `<source>` position and key.
/// Contexts left without messages are dropped.
fn remove_messages(path: &Path, targets: &BTreeSet<Target>) -> Result<usize> {
    let mut catalog = parse_ts_file(path)?;

    let mut removed = 0;
    for context in &mut catalog.contexts {
        let before = context.messages.len();
        let name = &context.name;
        context
            .messages
            .retain(|m| !targets.contains(&(m.line, m.col, m.key(name))));
        removed += before - context.messages.len();
    }
    if removed == 0 {
        return Ok(0);
    }
    catalog.contexts.retain(|c| !c.messages.is_empty());

    write_ts_file(&catalog, path)?;
    Ok(removed)
}
