//! Row mapping and per-sheet row processing
//!
//! Rows become ordered key/value maps; empty rows are either dropped or kept
//! as `None` gaps so output indices line up with sheet rows.

use crate::cell::CellValue;
use crate::config::EffectiveSheetConfig;
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// One converted row: output key to cell value, in ascending column order
pub type OutputRow = IndexMap<String, CellValue>;

/// Map a single row of `sheet` to an output row.
///
/// Without stubs only the cells that exist contribute keys; explicit blanks
/// behave like missing cells. With stubs every column up to the sheet's
/// column count is emitted, with `null` for blank or missing cells.
#[must_use]
pub fn map_row(config: &EffectiveSheetConfig, sheet: &Sheet, row: usize) -> OutputRow {
    let mut output = OutputRow::new();

    let columns: Box<dyn Iterator<Item = usize> + '_> = if config.include_stubs {
        Box::new(0..sheet.col_count())
    } else {
        Box::new(sheet.present_columns(row))
    };

    for col in columns {
        let value = match sheet.cell(row, col) {
            Some(value) if !value.is_null() => value.clone(),
            _ if config.include_stubs => CellValue::Null,
            _ => continue,
        };
        output.insert(config.key_for(col).into_owned(), value);
    }

    output
}

/// A row is empty when every value is blank; whitespace is not blank.
#[must_use]
pub fn is_empty_row(row: &OutputRow) -> bool {
    row.values().all(CellValue::is_blank)
}

/// Convert every row of a sheet.
///
/// Header rows and empty rows are dropped, or kept as `None` gaps at their
/// position when `include_empty_lines` is set.
#[must_use]
pub fn process_sheet(sheet: &Sheet, config: &EffectiveSheetConfig) -> Vec<Option<OutputRow>> {
    let mut rows = Vec::with_capacity(sheet.row_count());

    for row in 0..sheet.row_count() {
        if row < config.header_rows {
            tracing::trace!(sheet = sheet.name(), row, "skipping header row");
            if config.include_empty_lines {
                rows.push(None);
            }
            continue;
        }

        let mapped = map_row(config, sheet, row);
        if is_empty_row(&mapped) {
            tracing::trace!(sheet = sheet.name(), row, "empty row");
            if config.include_empty_lines {
                rows.push(None);
            }
            continue;
        }

        rows.push(Some(mapped));
    }

    tracing::debug!(
        sheet = sheet.name(),
        source_rows = sheet.row_count(),
        output_rows = rows.len(),
        "processed sheet"
    );
    rows
}
