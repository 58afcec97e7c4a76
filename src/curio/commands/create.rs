use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::DocumentStore;

/// Overwrites the document with the empty initial state, id counter
/// included. Destroys all prior records; there is no undo.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    store.store(&Document::default())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Catalog reset to empty."));
    Ok(result)
}
