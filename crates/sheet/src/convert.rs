//! Workbook-level conversion
//!
//! Picks the selected sheets, resolves their options and collects the
//! converted rows under each sheet name.

use crate::book::Workbook;
use crate::config::{Config, EffectiveSheetConfig, SheetOptions};
use crate::error::Result;
use crate::mapper::{process_sheet, OutputRow};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// Converted workbook: sheet name to rows, where `None` is a gap
pub type OutputWorkbook = IndexMap<String, Vec<Option<OutputRow>>>;

/// Convert the selected sheets of `workbook`.
///
/// Every selected sheet is looked up and its configuration resolved before
/// any rows are converted, so a bad sheet name or header template fails the
/// whole call without partial output. When a sheet is selected twice the
/// later entry's rows replace the earlier ones.
pub fn run(workbook: &Workbook, config: &Config) -> Result<OutputWorkbook> {
    let selections: Vec<(&str, Option<&SheetOptions>)> = match &config.sheets {
        Some(sheets) => sheets.iter().map(|s| (s.name(), s.options())).collect(),
        None => workbook
            .sheet_names()
            .into_iter()
            .map(|name| (name, None))
            .collect(),
    };

    let plan = selections
        .into_iter()
        .map(|(name, overrides)| {
            let sheet = workbook.get_sheet(name)?;
            let effective = EffectiveSheetConfig::resolve(&config.defaults, overrides, sheet)?;
            Ok((name, sheet, effective))
        })
        .collect::<Result<Vec<(&str, &Sheet, EffectiveSheetConfig)>>>()?;

    tracing::debug!(sheets = plan.len(), "converting workbook");

    let mut output = OutputWorkbook::new();
    for (name, sheet, effective) in plan {
        output.insert(name.to_string(), process_sheet(sheet, &effective));
    }
    Ok(output)
}
