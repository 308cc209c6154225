//! Record codec
//!
//! Reads and writes headerless comma-separated records.
//!
//! Fields are positional and follow the struct field order. Values are
//! quoted only when needed, so files from the plain comma-joined format
//! read back unchanged and simple records are written byte-identically.

use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CafeError, Result};
use crate::model::{Customer, MenuItem};

/// A persisted record with a fixed number of columns
pub trait Record: Serialize + DeserializeOwned {
    const COLUMNS: usize;
}

impl Record for MenuItem {
    const COLUMNS: usize = 5;
}

impl Record for Customer {
    const COLUMNS: usize = 3;
}

/// Decode every record from `input`.
///
/// `source` only labels errors. Blank lines are skipped. A line with more
/// or fewer fields than `T::COLUMNS` is rejected.
pub fn read_records<T, R>(source: &Path, input: R) -> Result<Vec<T>>
where
    T: Record,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader
        .read_record(&mut raw)
        .map_err(|e| codec_error(source, e))?
    {
        if raw.len() != T::COLUMNS {
            return Err(CafeError::Codec {
                path: source.to_path_buf(),
                line: raw.position().map(|p| p.line()).unwrap_or(0),
                message: format!("expected {} fields, found {}", T::COLUMNS, raw.len()),
            });
        }
        let record = raw.deserialize(None).map_err(|e| codec_error(source, e))?;
        records.push(record);
    }
    Ok(records)
}

/// Encode `records` to `output`, one per line, `\n` terminated.
pub fn write_records<T, W>(output: W, records: &[T]) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(output);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn codec_error(source: &Path, err: csv::Error) -> CafeError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CafeError::Io(io),
        kind => CafeError::Codec {
            path: source.to_path_buf(),
            line,
            message: describe_kind(&kind),
        },
    }
}

fn describe_kind(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        other => format!("{:?}", other),
    }
}
