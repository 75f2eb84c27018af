use std::io::Write;

use crate::error::AppResult;

pub fn write_line<W: Write>(out: &mut W, line: &str) -> AppResult<()> {
    writeln!(out, "{line}")?;
    Ok(())
}
