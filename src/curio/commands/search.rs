use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::store::DocumentStore;

/// Exact text-equality search over a single field. Numeric fields compare
/// through their text rendering; no substring matching.
pub fn run<S: DocumentStore>(store: &S, field: Field, value: &str) -> Result<CmdResult> {
    let doc = store.load()?;

    let matches = doc
        .records
        .values()
        .filter(|record| record.field_text(field) == value)
        .cloned()
        .collect();

    Ok(CmdResult::default().with_records(matches))
}
