//! JSON output

use serde::Serialize;
use std::io::Write;

use crate::error::SpendlensResult;

/// Write a value as pretty-printed JSON followed by a newline
pub fn write_json<T, W>(value: &T, writer: &mut W) -> SpendlensResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
