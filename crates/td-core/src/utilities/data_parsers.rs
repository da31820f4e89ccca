//! Parsing helpers for command-line style inputs.

use crate::errors::{Error, Result};
use crate::Size;

/// Parse a problem size such as `"1000"`.
///
/// The text is read as a signed integer first so that `"-5"` is reported
/// as an invalid size rather than a parse failure.
///
/// # Errors
/// [`Error::InvalidSize`] if the value is zero or negative,
/// [`Error::Precondition`] if the text is not an integer at all.
pub fn parse_size(s: &str) -> Result<Size> {
    let s = s.trim();
    let n: i64 = s
        .parse()
        .map_err(|_| Error::Precondition(format!("'{s}' is not an integer")))?;
    if n <= 0 {
        return Err(Error::InvalidSize(n));
    }
    Size::try_from(n).map_err(|_| Error::InvalidSize(n))
}
