//! Spreadsheet to JSON row conversion for excel2json
//!
//! Turns every selected sheet of a workbook into an ordered list of row
//! objects. Keys default to column letters and can be renamed, taken from a
//! header cell, or derived from `{{columnHeader}}` for all columns at once.
//!
//! # Examples
//!
//! ## Converting an in-memory workbook
//!
//! ```
//! use excel2json_sheet::{run, CellValue, Config, Sheet, SheetOptions, Workbook};
//!
//! let mut book = Workbook::new();
//! book.add_sheet("s", Sheet::from_data(vec![
//!     vec![CellValue::from("id"), CellValue::from("name")],
//!     vec![CellValue::from(1), CellValue::from("Jack")],
//!     vec![CellValue::from(""), CellValue::from("")],
//!     vec![CellValue::from(2), CellValue::from("Alice")],
//! ])).unwrap();
//!
//! let config = Config {
//!     defaults: SheetOptions::default().with_header_rows(1),
//!     ..Default::default()
//! };
//! let output = run(&book, &config).unwrap();
//!
//! assert_eq!(
//!     excel2json_sheet::to_json_string(&output, false).unwrap(),
//!     r#"{"s":[{"A":1,"B":"Jack"},{"A":2,"B":"Alice"}]}"#
//! );
//! ```
//!
//! ## Keys from the header row
//!
//! ```
//! use excel2json_sheet::{run, Config, Sheet, Workbook};
//!
//! let mut book = Workbook::new();
//! book.add_sheet("people", Sheet::from_data(vec![
//!     vec!["id", "first_name"],
//!     vec!["25", "Jack"],
//! ])).unwrap();
//!
//! let config = Config::from_json_str(
//!     r#"{"header": {"rows": 1}, "columnToKey": {"*": "{{columnHeader}}"}}"#,
//! ).unwrap();
//! let output = run(&book, &config).unwrap();
//!
//! let row = output["people"][0].as_ref().unwrap();
//! assert_eq!(row.keys().collect::<Vec<_>>(), vec!["id", "first_name"]);
//! ```
//!
//! ## Loading a file
//!
//! ```no_run
//! use excel2json_sheet::{convert, ConvertConfig};
//!
//! let config = ConvertConfig::from_json_str(r#"{"sourceFile": "data.xlsx"}"#).unwrap();
//! let output = convert(&config).unwrap();
//! ```

mod a1_notation;
mod book;
mod cell;
mod config;
mod convert;
mod error;
mod json;
mod mapper;
mod sheet;
mod template;
mod xlsx;

/// Re-export column letter helpers.
pub use a1_notation::{column_index_to_letters, column_letters_to_index, parse_a1, to_a1_notation};
/// Re-export workbook type.
pub use book::Workbook;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export configuration types.
pub use config::{
    Config, EffectiveSheetConfig, HeaderOptions, MissingHeaderPolicy, SheetOptions,
    SheetSelection, WILDCARD_COLUMN,
};
/// Re-export the conversion entry point.
pub use convert::{run, OutputWorkbook};
/// Re-export conversion error types.
pub use error::{ConvertError, Result};
/// Re-export JSON output helpers.
pub use json::{to_json_string, write_json};
/// Re-export the row mapping steps.
pub use mapper::{is_empty_row, map_row, process_sheet, OutputRow};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export key template resolution.
pub use template::KeyResolver;
/// Re-export file loading.
pub use xlsx::{convert, ConvertConfig};
