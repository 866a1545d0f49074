//! Conversion configuration
//!
//! The JSON shape follows the classic `excel-to-json` options:
//!
//! ```json
//! {
//!   "sheets": ["sheet1", {"name": "sheet2", "header": {"rows": 1}}],
//!   "header": {"rows": 0},
//!   "columnToKey": {"A": "id", "*": "{{columnHeader}}"},
//!   "includeEmptyLines": false,
//!   "sheetStubs": false
//! }
//! ```
//!
//! Sheet-level fields replace the top-level field of the same name entirely;
//! `columnToKey` maps are never merged.

use crate::a1_notation::{column_index_to_letters, column_letters_to_index};
use crate::error::{ConvertError, Result};
use crate::sheet::Sheet;
use crate::template::KeyResolver;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// `columnToKey` entry that applies to every column without its own entry
pub const WILDCARD_COLUMN: &str = "*";

/// What to do when a key template references an empty cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingHeaderPolicy {
    /// Fail the conversion with `MissingHeaderCell`
    #[default]
    Error,
    /// Use the column letter as the key
    ColumnLetter,
}

/// Header section of the options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOptions {
    /// Number of leading rows treated as headers
    #[serde(default)]
    pub rows: usize,
}

/// Options that can be given globally or per sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_to_key: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_empty_lines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_stubs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_header: Option<MissingHeaderPolicy>,
}

impl SheetOptions {
    #[must_use]
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header = Some(HeaderOptions { rows });
        self
    }

    #[must_use]
    pub fn with_column_key(mut self, column: &str, key: &str) -> Self {
        self.column_to_key
            .get_or_insert_with(IndexMap::new)
            .insert(column.to_string(), key.to_string());
        self
    }

    #[must_use]
    pub fn with_include_empty_lines(mut self, include: bool) -> Self {
        self.include_empty_lines = Some(include);
        self
    }

    #[must_use]
    pub fn with_sheet_stubs(mut self, stubs: bool) -> Self {
        self.sheet_stubs = Some(stubs);
        self
    }

    #[must_use]
    pub fn with_missing_header(mut self, policy: MissingHeaderPolicy) -> Self {
        self.missing_header = Some(policy);
        self
    }
}

/// One entry of the `sheets` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelection {
    /// Bare sheet name, inherits the global options
    Name(String),
    /// Sheet name with its own options
    Custom {
        name: String,
        #[serde(flatten)]
        options: SheetOptions,
    },
}

impl SheetSelection {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SheetSelection::Name(name) | SheetSelection::Custom { name, .. } => name,
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&SheetOptions> {
        match self {
            SheetSelection::Name(_) => None,
            SheetSelection::Custom { options, .. } => Some(options),
        }
    }
}

/// Complete engine configuration: sheet selection plus global defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sheets to convert, in order; `None` converts every sheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<Vec<SheetSelection>>,
    #[serde(flatten)]
    pub defaults: SheetOptions,
}

impl Config {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ConvertError::Configuration(format!("Invalid config JSON: {e}")))
    }
}

/// Fully resolved options for one sheet
///
/// Built once per sheet before any row is mapped, so every row of a sheet
/// sees the same keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveSheetConfig {
    pub header_rows: usize,
    pub include_empty_lines: bool,
    pub include_stubs: bool,
    /// Output key per column index; unlisted columns use their letter
    pub column_keys: BTreeMap<usize, String>,
}

impl EffectiveSheetConfig {
    /// Merge `global` with an optional per-sheet `overrides` and resolve
    /// `columnToKey` templates against `sheet`.
    pub fn resolve(
        global: &SheetOptions,
        overrides: Option<&SheetOptions>,
        sheet: &Sheet,
    ) -> Result<Self> {
        macro_rules! pick {
            ($field:ident) => {
                overrides
                    .and_then(|o| o.$field.as_ref())
                    .or(global.$field.as_ref())
            };
        }

        let header_rows = pick!(header).map_or(0, |h| h.rows);
        let include_empty_lines = pick!(include_empty_lines).copied().unwrap_or(false);
        let include_stubs = pick!(sheet_stubs).copied().unwrap_or(false);
        let policy = pick!(missing_header).copied().unwrap_or_default();

        let column_keys = match pick!(column_to_key) {
            Some(mapping) => resolve_column_keys(mapping, sheet, header_rows, policy)?,
            None => BTreeMap::new(),
        };

        tracing::debug!(
            sheet = sheet.name(),
            header_rows,
            include_empty_lines,
            include_stubs,
            mapped_columns = column_keys.len(),
            "resolved sheet config"
        );

        Ok(EffectiveSheetConfig {
            header_rows,
            include_empty_lines,
            include_stubs,
            column_keys,
        })
    }

    /// Output key for a column
    #[must_use]
    pub fn key_for(&self, col: usize) -> Cow<'_, str> {
        match self.column_keys.get(&col) {
            Some(key) => Cow::Borrowed(key),
            None => Cow::Owned(column_index_to_letters(col)),
        }
    }
}

fn resolve_column_keys(
    mapping: &IndexMap<String, String>,
    sheet: &Sheet,
    header_rows: usize,
    policy: MissingHeaderPolicy,
) -> Result<BTreeMap<usize, String>> {
    let resolver = KeyResolver::new(sheet, header_rows, policy);
    let mut keys = BTreeMap::new();
    let mut wildcard = None;

    for (column, expr) in mapping {
        if column == WILDCARD_COLUMN {
            wildcard = Some(expr);
            continue;
        }
        let col = column_letters_to_index(column)?;
        keys.insert(col, resolver.resolve(expr, col)?);
    }

    if let Some(expr) = wildcard {
        for col in 0..sheet.col_count() {
            if !keys.contains_key(&col) {
                let key = resolver.resolve(expr, col)?;
                keys.insert(col, key);
            }
        }
    }

    Ok(keys)
}
