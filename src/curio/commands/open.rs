use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use std::path::Path;

/// Loads the document at `path` and makes it the active catalog. Path-level
/// operation, so it works on the file store directly rather than through
/// the `DocumentStore` trait.
pub fn run(store: &mut FileStore, path: &Path) -> Result<CmdResult> {
    let doc = store.open(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Opened catalog {} ({} record(s)).",
        path.display(),
        doc.records.len()
    )));
    Ok(result.with_records(doc.records.into_values().collect()))
}
