use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

/// Returns every record in insertion order. This is the shell's re-fetch
/// path after a mutation.
pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let doc = store.load()?;
    let records = doc.records.values().cloned().collect();
    Ok(CmdResult::default().with_records(records))
}
