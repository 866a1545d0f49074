use crate::cell::CellValue;

/// A named, sparse 2D grid of cells (row-major storage)
///
/// Rows may have different lengths. A `None` slot is a cell that does not
/// exist, which is different from an explicit `CellValue::Null` stub.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<Option<CellValue>>>,
    /// Width of the widest row
    width: usize,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            width: 0,
        }
    }

    /// Create a sheet from a 2D vector of values; every cell is present
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        Self::from_cells(
            data.into_iter()
                .map(|row| row.into_iter().map(|v| Some(v.into())).collect())
                .collect(),
        )
    }

    /// Create a sheet from sparse rows, where `None` marks a missing cell
    #[must_use]
    pub fn from_cells(data: Vec<Vec<Option<CellValue>>>) -> Self {
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        Sheet {
            name: "Sheet1".to_string(),
            data,
            width,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Number of rows, i.e. the index of the last row plus one
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Number of columns, i.e. the width of the widest row
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.width
    }

    /// Check if the sheet has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell by row and column index (0-based), `None` if it does not exist
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.data.get(row).and_then(|r| r.get(col)).and_then(Option::as_ref)
    }

    /// Column indices of the cells that exist in a row, ascending
    pub fn present_columns(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.data
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().enumerate())
            .filter_map(|(col, cell)| cell.as_ref().map(|_| col))
    }

    /// Set a cell, growing the grid as needed
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        if self.data.len() <= row {
            self.data.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.data[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
            self.width = self.width.max(col + 1);
        }
        cells[col] = Some(value.into());
    }

    /// Remove a cell so that it no longer exists
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(slot) = self.data.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = None;
        }
    }
}
