//! Positional field access shared by event and reply decoding.

use crate::error::{CodecError, Result};

/// Borrow the field at `index`, or report it missing.
pub(crate) fn text<'a, S: AsRef<str>>(
    frame: &'static str,
    fields: &'a [S],
    index: usize,
) -> Result<&'a str> {
    fields
        .get(index)
        .map(AsRef::as_ref)
        .ok_or(CodecError::MissingField { frame, index })
}

/// Parse the field at `index` as a decimal integer.
pub(crate) fn uint<S: AsRef<str>>(frame: &'static str, fields: &[S], index: usize) -> Result<u32> {
    let value = text(frame, fields, index)?;
    value.parse().map_err(|_| CodecError::InvalidNumber {
        frame,
        index,
        value: value.to_string(),
    })
}
