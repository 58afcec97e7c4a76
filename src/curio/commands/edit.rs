use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::model::{record_key, Record};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(
    store: &mut S,
    id: u64,
    title: &str,
    year: i32,
    artist: &str,
    style: &str,
) -> Result<CmdResult> {
    let mut doc = store.load()?;

    let old_key = match doc.find_by_id(id) {
        Some((key, _)) => key.clone(),
        None => return Err(CurioError::RecordNotFound(format!("id {}", id))),
    };

    let new_key = record_key(title, year, artist);
    // A key move may not land on another record's key.
    if new_key != old_key && doc.records.contains_key(&new_key) {
        return Err(CurioError::DuplicateRecord(new_key));
    }

    let record = Record::new(id, title, year, artist, style);
    doc.records.insert(new_key.clone(), record.clone());
    if new_key != old_key {
        doc.records.shift_remove(&old_key);
    }
    store.store(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated record #{}: {}",
        record.id, record.title
    )));
    Ok(result.with_records(vec![record]))
}
