use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::model::record_key;
use crate::store::DocumentStore;

/// Deletes the record stored under the key recomputed from `title`, `year`
/// and `artist`. The `id` and `style` arguments are part of the call
/// contract but do not participate in the lookup; a record is only removed
/// when the key fields match exactly.
pub fn run<S: DocumentStore>(
    store: &mut S,
    _id: u64,
    title: &str,
    year: i32,
    artist: &str,
    _style: &str,
) -> Result<CmdResult> {
    let mut doc = store.load()?;

    let key = record_key(title, year, artist);
    let removed = match doc.records.shift_remove(&key) {
        Some(record) => record,
        None => return Err(CurioError::RecordNotFound(key)),
    };
    store.store(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted record #{}: {}",
        removed.id, removed.title
    )));
    Ok(result.with_records(vec![removed]))
}
