use std::io::Write;

use serde::Serialize;

use crate::error::AppResult;

pub fn write<W: Write, T: Serialize>(out: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
