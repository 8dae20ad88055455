//! Core types for column formatting policy.
//!
//! A column's declared type is a formatting hint, not a constraint on the
//! values it holds: an integer under a `str` column renders fine, it is just
//! left-aligned.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// Formatting policy derived from a column's declared type tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnType {
    /// `int`, `integer`, `i64`, `long`
    Integer,
    /// `float`, `double`, `number`, `decimal`
    Float,
    /// `str`, `string`, `text`
    Text,
    /// `bool`, `boolean`
    Boolean,
    /// No type tag was declared.
    #[default]
    Unspecified,
    /// A tag that is not recognized. Rendered like text.
    Unknown,
}

impl ColumnType {
    /// Maps a declared type tag to its formatting policy.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use speedtable_render::tabular::ColumnType;
    ///
    /// assert_eq!(ColumnType::from_tag(Some("int")), ColumnType::Integer);
    /// assert_eq!(ColumnType::from_tag(Some("STR")), ColumnType::Text);
    /// assert_eq!(ColumnType::from_tag(Some("uuid")), ColumnType::Unknown);
    /// assert_eq!(ColumnType::from_tag(None), ColumnType::Unspecified);
    /// ```
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return ColumnType::Unspecified;
        };
        match tag.trim().to_lowercase().as_str() {
            "" => ColumnType::Unspecified,
            "int" | "integer" | "i64" | "long" => ColumnType::Integer,
            "float" | "double" | "number" | "decimal" => ColumnType::Float,
            "str" | "string" | "text" => ColumnType::Text,
            "bool" | "boolean" => ColumnType::Boolean,
            _ => ColumnType::Unknown,
        }
    }

    /// Returns true for columns that hold numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Alignment used for this column's cells.
    pub fn align(&self) -> Align {
        if self.is_numeric() {
            Align::Right
        } else {
            Align::Left
        }
    }
}
