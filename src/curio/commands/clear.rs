use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

/// Removes every record but keeps the id counter, so ids issued after a
/// clear continue from where they left off.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let removed = doc.records.len();
    doc.records.clear();
    store.store(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} record(s).",
        removed
    )));
    Ok(result)
}
