//! Obsolete entry detection rule.
//!
//! lupdate keeps entries whose source string disappeared from the
//! application, marked `type="vanished"` (or the older `"obsolete"`). They
//! never resolve at runtime; `tscat clean` removes them.

use crate::{
    core::{Catalog, CheckContext},
    issues::ObsoleteIssue,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    check_obsolete(&ctx.catalogs)
}

pub fn check_obsolete(catalogs: &[Catalog]) -> Vec<ObsoleteIssue> {
    catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(_, message)| message.state.is_obsolete())
                .map(|(context, message)| ObsoleteIssue {
                    context: catalog.message_context(context, message),
                    state: message.state,
                })
        })
        .collect()
}
