//! Cell and header formatting.
//!
//! The formatter turns each [`Cell`] into its display string under the
//! column's [`ColumnType`]. Alignment is applied later, once the layout
//! engine has settled the column widths.

use crate::model::{Cell, ColumnSpec};

use super::types::ColumnType;
use super::util::display_width;

/// Converts cell values to display strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellFormatter {
    thousands_separator: Option<char>,
}

impl CellFormatter {
    /// Creates a formatter. With a separator, numbers in numeric columns are
    /// grouped by thousands.
    pub fn new(thousands_separator: Option<char>) -> Self {
        CellFormatter {
            thousands_separator,
        }
    }

    /// Formats a cell for a column of the given type.
    ///
    /// ```rust
    /// use speedtable_render::model::Cell;
    /// use speedtable_render::tabular::{CellFormatter, ColumnType};
    ///
    /// let plain = CellFormatter::default();
    /// assert_eq!(plain.format(&Cell::from(1234567), ColumnType::Integer), "1234567");
    ///
    /// let grouped = CellFormatter::new(Some(','));
    /// assert_eq!(grouped.format(&Cell::from(1234567), ColumnType::Integer), "1,234,567");
    /// assert_eq!(grouped.format(&Cell::from(1234567), ColumnType::Text), "1234567");
    /// ```
    pub fn format(&self, cell: &Cell, kind: ColumnType) -> String {
        let text = cell.to_string();
        match (self.thousands_separator, cell) {
            (Some(sep), Cell::Integer(_) | Cell::Unsigned(_) | Cell::Float(_))
                if kind.is_numeric() =>
            {
                group_thousands(&text, sep)
            }
            _ => text,
        }
    }
}

/// Inserts `sep` between groups of three digits in the integer part.
///
/// Anything that is not a plain decimal number (`NaN`, `inf`) is returned
/// unchanged.
pub fn group_thousands(number: &str, sep: char) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// A header label: the column name plus an optional type annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLabel {
    pub name: String,
    /// Parenthesized type tag, e.g. `(int)`.
    pub annotation: Option<String>,
}

impl HeaderLabel {
    /// Builds the label for a column. Columns without a declared type never
    /// carry an annotation.
    pub fn for_column(column: &ColumnSpec, show_type: bool) -> Self {
        let annotation = match column.tag() {
            Some(tag) if show_type => Some(format!("({})", tag)),
            _ => None,
        };
        HeaderLabel {
            name: column.name().to_string(),
            annotation,
        }
    }

    /// The unstyled label text.
    pub fn text(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!("{} {}", self.name, annotation),
            None => self.name.clone(),
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.text())
    }
}
