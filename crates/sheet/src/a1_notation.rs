use crate::error::{ConvertError, Result};

/// Convert column letters to 0-based column index
/// A=0, B=1, ... Z=25, AA=26, AB=27, ...
///
/// Letters are case-insensitive.
pub fn column_letters_to_index(letters: &str) -> Result<usize> {
    if letters.is_empty() {
        return Err(ConvertError::InvalidColumnSpec(letters.to_string()));
    }

    let mut col: usize = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(ConvertError::InvalidColumnSpec(letters.to_string()));
        }
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(usize::from(b.to_ascii_uppercase() - b'A') + 1))
            .ok_or_else(|| ConvertError::InvalidColumnSpec(letters.to_string()))?;
    }

    Ok(col - 1)
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
pub fn column_index_to_letters(col: usize) -> String {
    let mut result = Vec::new();
    let mut n = col;

    loop {
        result.push((n % 26) as u8 + b'A');
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }

    result.reverse();
    String::from_utf8(result).unwrap_or_default()
}

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 0-based indices
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    let invalid = || ConvertError::InvalidCellAddress(notation.to_string());

    let split_pos = notation
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (col_part, row_part) = notation.split_at(split_pos);

    if col_part.is_empty() || !row_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let col = column_letters_to_index(col_part).map_err(|_| invalid())?;
    let row = row_part.parse::<usize>().map_err(|_| invalid())?;

    // Rows are 1-based in A1 notation
    if row == 0 {
        return Err(invalid());
    }

    Ok((row - 1, col))
}

/// Convert (row, col) to A1 notation
/// (0, 0) = "A1", (0, 1) = "B1", etc.
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row + 1)
}
