use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::VocabEntry;
use crate::error::EnrichError;

/// Writes the entry list as pretty-printed JSON. Non-ASCII is kept verbatim.
pub fn write_entries<W: Write>(mut w: W, entries: &[VocabEntry]) -> Result<(), EnrichError> {
    serde_json::to_writer_pretty(&mut w, entries)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the entry list to it.
pub fn save(path: &Path, entries: &[VocabEntry]) -> Result<(), EnrichError> {
    let file = File::create(path)?;
    write_entries(BufWriter::new(file), entries)
}
