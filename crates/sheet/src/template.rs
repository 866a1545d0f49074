//! Output key templates for `columnToKey`
//!
//! A key expression is either a literal (`"id"`) or text containing
//! placeholders. Exactly two placeholder forms exist:
//!
//! - `{{B1}}`: the value of cell B1 in the current sheet
//! - `{{columnHeader}}`: the value of the current column in the last header row
//!
//! An expression with an unterminated or unrecognised placeholder is used
//! verbatim as a literal key.

use crate::a1_notation::{column_index_to_letters, parse_a1, to_a1_notation};
use crate::config::MissingHeaderPolicy;
use crate::error::{ConvertError, Result};
use crate::sheet::Sheet;

const COLUMN_HEADER: &str = "columnHeader";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Cell { row: usize, col: usize },
    ColumnHeader,
}

/// Split an expression into segments, or `None` if it must be taken literally
fn parse_segments(expr: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = expr;

    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let close = after_open.find("}}")?;
        let inner = after_open[..close].trim();

        let placeholder = if inner == COLUMN_HEADER {
            Segment::ColumnHeader
        } else {
            let (row, col) = parse_a1(inner).ok()?;
            Segment::Cell { row, col }
        };

        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        segments.push(placeholder);
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Some(segments)
}

/// Resolves key expressions against one sheet
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    sheet: &'a Sheet,
    header_row: usize,
    policy: MissingHeaderPolicy,
}

impl<'a> KeyResolver<'a> {
    /// `header_rows` is the configured header row count; `{{columnHeader}}`
    /// reads the last of them, or the first row when there are none.
    #[must_use]
    pub fn new(sheet: &'a Sheet, header_rows: usize, policy: MissingHeaderPolicy) -> Self {
        KeyResolver {
            sheet,
            header_row: header_rows.saturating_sub(1),
            policy,
        }
    }

    /// Resolve `expr` to a concrete key for column `col`
    pub fn resolve(&self, expr: &str, col: usize) -> Result<String> {
        if !expr.contains("{{") {
            return Ok(expr.to_string());
        }

        let Some(segments) = parse_segments(expr) else {
            return Ok(expr.to_string());
        };

        let mut key = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => key.push_str(text),
                Segment::Cell { row, col: cell_col } => {
                    key.push_str(&self.cell_text(row, cell_col, col)?);
                }
                Segment::ColumnHeader => {
                    key.push_str(&self.cell_text(self.header_row, col, col)?);
                }
            }
        }
        Ok(key)
    }

    fn cell_text(&self, row: usize, col: usize, current_col: usize) -> Result<String> {
        match self.sheet.cell(row, col) {
            Some(value) if !value.is_null() => Ok(value.as_str()),
            _ => {
                let address = to_a1_notation(row, col);
                match self.policy {
                    MissingHeaderPolicy::Error => Err(ConvertError::MissingHeaderCell {
                        sheet: self.sheet.name().to_string(),
                        address,
                    }),
                    MissingHeaderPolicy::ColumnLetter => {
                        let letters = column_index_to_letters(current_col);
                        tracing::warn!(
                            sheet = self.sheet.name(),
                            %address,
                            key = %letters,
                            "header cell is empty, falling back to column letter"
                        );
                        Ok(letters)
                    }
                }
            }
        }
    }
}
