//! Two-column text output: one `x v` pair per line, no header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use td_core::errors::{Error, Result};
use td_math::Array;

/// Write `x[i] v[i]` lines to `dest` in index order.
///
/// # Errors
/// [`Error::DimensionMismatch`] if the two arrays differ in length (checked
/// before anything is written), [`Error::Io`] if the destination fails.
pub fn write_columns<W: Write + ?Sized>(dest: &mut W, x: &Array, v: &Array) -> Result<()> {
    if x.size() != v.size() {
        return Err(Error::DimensionMismatch {
            expected: x.size(),
            found: v.size(),
        });
    }
    for (xi, vi) in x.iter().zip(v.iter()) {
        writeln!(dest, "{xi} {vi}")?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the columns into it.
///
/// The file handle lives only for the duration of this call and is closed
/// on every return path.
pub fn write_to_file(path: &Path, x: &Array, v: &Array) -> Result<()> {
    if x.size() != v.size() {
        return Err(Error::DimensionMismatch {
            expected: x.size(),
            found: v.size(),
        });
    }
    let file = File::create(path)
        .map_err(|e| Error::Io(format!("cannot create {}: {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_columns(&mut out, x, v)?;
    out.flush()?;
    Ok(())
}
