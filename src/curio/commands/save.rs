use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use std::path::Path;

/// Writes a copy of the active document to `path`. The active catalog path
/// is unchanged.
pub fn run(store: &FileStore, path: &Path) -> Result<CmdResult> {
    store.save_copy(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved catalog copy to {}",
        path.display()
    )));
    Ok(result)
}
