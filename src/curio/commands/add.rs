use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::model::{record_key, Record};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(
    store: &mut S,
    title: &str,
    year: i32,
    artist: &str,
    style: &str,
) -> Result<CmdResult> {
    let mut doc = store.load()?;

    let key = record_key(title, year, artist);
    if doc.records.contains_key(&key) {
        return Err(CurioError::DuplicateRecord(key));
    }

    let record = Record::new(doc.next_id, title, year, artist, style);
    doc.records.insert(key, record.clone());
    doc.next_id += 1;
    store.store(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added record #{}: {}",
        record.id, record.title
    )));
    Ok(result.with_records(vec![record]))
}
