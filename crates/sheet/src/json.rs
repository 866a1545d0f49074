//! JSON output for converted workbooks
//!
//! Rows become objects keyed by output key; gaps become `null`.

use crate::convert::OutputWorkbook;
use crate::error::Result;
use std::io::Write;

/// Write a converted workbook to a writer as JSON
pub fn write_json<W: Write>(output: &OutputWorkbook, writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, output)?;
    } else {
        serde_json::to_writer(writer, output)?;
    }
    Ok(())
}

/// Convert a converted workbook to a JSON string
pub fn to_json_string(output: &OutputWorkbook, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}
