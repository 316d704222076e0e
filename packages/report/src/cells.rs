//! Cell access helpers shared by both report decoders.

use crate::ParseError;

/// Concatenates every cell of a row with no separator.
#[must_use]
pub fn join<S: AsRef<str>>(row: &[S]) -> String {
    row.iter().map(AsRef::as_ref).collect()
}

/// Returns the cell at `index`.
///
/// # Errors
///
/// Returns [`ParseError::MissingCell`] if the row is too short.
pub fn cell<S: AsRef<str>>(row: &[S], index: usize) -> Result<&str, ParseError> {
    row.get(index)
        .map(AsRef::as_ref)
        .ok_or_else(|| ParseError::MissingCell {
            index,
            len: row.len(),
        })
}

/// Reads the cell at `index` as an unsigned integer.
///
/// The outer error is a short row; the inner `None` is a cell that is
/// present but not a number, which callers may treat as an ordinary
/// non-match.
///
/// # Errors
///
/// Returns [`ParseError::MissingCell`] if the row is too short.
pub fn try_number<S: AsRef<str>>(row: &[S], index: usize) -> Result<Option<u32>, ParseError> {
    Ok(cell(row, index)?.parse().ok())
}

/// Reads the cell at `index` as an unsigned integer that must be present.
///
/// # Errors
///
/// Returns [`ParseError::MissingCell`] if the row is too short, or
/// [`ParseError::InvalidNumber`] if the cell is not a number.
pub fn number<S: AsRef<str>>(row: &[S], index: usize) -> Result<u32, ParseError> {
    let value = cell(row, index)?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        index,
        value: value.to_string(),
    })
}

/// Returns `None` for an empty cell, otherwise the cell text.
///
/// # Errors
///
/// Returns [`ParseError::MissingCell`] if the row is too short.
pub fn optional<S: AsRef<str>>(row: &[S], index: usize) -> Result<Option<&str>, ParseError> {
    let value = cell(row, index)?;
    Ok((!value.is_empty()).then_some(value))
}

/// Returns the last `len` characters before the final character of `text`.
#[must_use]
pub fn chars_before_last(text: &str, len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let end = chars.len().saturating_sub(1);
    let start = end.saturating_sub(len);
    chars[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_separator() {
        assert_eq!(join(&["a", "", "bc"]), "abc");
        assert_eq!(join::<&str>(&[]), "");
    }

    #[test]
    fn missing_cell_reports_position() {
        let row = ["a", "b"];
        assert_eq!(
            cell(&row, 5).unwrap_err(),
            ParseError::MissingCell { index: 5, len: 2 }
        );
    }

    #[test]
    fn try_number_distinguishes_non_numbers() {
        let row = ["", "101", "00A"];
        assert_eq!(try_number(&row, 1).unwrap(), Some(101));
        assert_eq!(try_number(&row, 2).unwrap(), None);
        assert_eq!(try_number(&row, 0).unwrap(), None);
        assert!(try_number(&row, 3).is_err());
    }

    #[test]
    fn number_rejects_non_numbers() {
        let row = ["x"];
        assert_eq!(
            number(&row, 0).unwrap_err(),
            ParseError::InvalidNumber {
                index: 0,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn optional_treats_empty_as_absent() {
        let row = ["", "Smith"];
        assert_eq!(optional(&row, 0).unwrap(), None);
        assert_eq!(optional(&row, 1).unwrap(), Some("Smith"));
    }

    #[test]
    fn takes_chars_before_last() {
        assert_eq!(chars_before_last("SUBJECT: ART HISTORY (220)", 3), "220");
        assert_eq!(chars_before_last("ab", 3), "a");
    }
}
