use crate::book::Workbook;
use crate::cell::CellValue;
use crate::config::Config;
use crate::convert::{run, OutputWorkbook};
use crate::error::{ConvertError, Result};
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

/// Convert calamine Data to a cell, `None` for cells without a value
fn data_to_cell_value(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => return None,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        // Excel serial date: days since 1899-12-30
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    };
    Some(value)
}

/// Copy a calamine range into a sheet, keeping absolute coordinates
fn range_to_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::with_name(name);
    let Some((start_row, start_col)) = range.start() else {
        return sheet;
    };

    for (row, col, data) in range.used_cells() {
        if let Some(value) = data_to_cell_value(data) {
            sheet.set(start_row as usize + row, start_col as usize + col, value);
        }
    }
    sheet
}

fn read_sheets<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Workbook> {
    let sheet_names = workbook.sheet_names().to_vec();
    let mut book = Workbook::new();

    for sheet_name in sheet_names {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ConvertError::Workbook(format!("{sheet_name}: {e}")))?;
        book.add_sheet(&sheet_name, range_to_sheet(&sheet_name, &range))?;
    }

    tracing::debug!(sheets = book.sheet_count(), "loaded workbook");
    Ok(book)
}

impl Workbook {
    /// Load every sheet of a spreadsheet file (xlsx, xlsm, xlsb, xls or ods)
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let workbook = open_workbook_auto(path)
            .map_err(|e| ConvertError::Workbook(format!("{}: {e}", path.display())))?;
        read_sheets(workbook)
    }

    /// Load every sheet of a spreadsheet held in memory
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| ConvertError::Workbook(e.to_string()))?;
        read_sheets(workbook)
    }
}

/// Engine configuration plus where to read the workbook from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertConfig {
    /// Path of the spreadsheet file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,
    /// Spreadsheet bytes, used when no `source_file` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<u8>>,
    #[serde(flatten)]
    pub config: Config,
}

impl ConvertConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ConvertError::Configuration(format!("Invalid config JSON: {e}")))
    }

    /// Load the workbook named by `source_file` or held in `source`
    pub fn load_workbook(&self) -> Result<Workbook> {
        match (&self.source_file, &self.source) {
            (Some(path), _) => Workbook::from_xlsx(path),
            (None, Some(bytes)) => Workbook::from_xlsx_bytes(bytes),
            (None, None) => Err(ConvertError::Configuration(
                "You should provide either sourceFile or source".to_string(),
            )),
        }
    }
}

/// Load the configured workbook and convert it
pub fn convert(config: &ConvertConfig) -> Result<OutputWorkbook> {
    let workbook = config.load_workbook()?;
    run(&workbook, &config.config)
}
