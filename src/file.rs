// src/file.rs

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Result;

/// Create/truncate `path` and write `contents` as UTF-8.
/// The parent directory must already exist; it is not created here.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes())?;
    out.flush()?;
    logf!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
