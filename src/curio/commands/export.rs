use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::model::Record;
use crate::store::DocumentStore;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn run<S: DocumentStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let doc = store.load()?;

    let file = File::create(path).map_err(CurioError::Io)?;
    write_csv(file, doc.records.values())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s) to {}",
        doc.records.len(),
        path.display()
    )));
    Ok(result)
}

fn write_csv<'a, W, I>(mut writer: W, records: I) -> Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Record>,
{
    writeln!(writer, "id,title,year,artist,style").map_err(CurioError::Io)?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            record.id,
            csv_field(&record.title),
            record.year,
            csv_field(&record.artist),
            csv_field(&record.style)
        )
        .map_err(CurioError::Io)?;
    }
    Ok(())
}

/// Standard CSV field escaping: quote when the value contains a comma,
/// quote or line break, doubling any embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
