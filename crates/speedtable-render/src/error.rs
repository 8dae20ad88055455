//! Error types for table rendering.
//!
//! Every failure aborts the whole render: there is no partial output. The
//! variants name the offending row, column or style token so callers can fix
//! their input and call again.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while building or rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Row and column shapes do not agree.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A style token does not resolve to any known color or attribute.
    #[error("style error: invalid token '{token}' for {region}: {reason}")]
    Style {
        token: String,
        region: Region,
        reason: String,
    },

    /// A cell value cannot be rendered as text.
    #[error("type mismatch: row {row}, column '{column}': cannot render {found} value")]
    TypeMismatch {
        row: usize,
        column: String,
        found: &'static str,
    },

    /// Wrong number or shape of positional arguments.
    #[error("invalid arguments: {0}")]
    Arguments(String),

    /// A table or style document could not be deserialized.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shape mismatches between declared columns and supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("table declares no columns")]
    NoColumns,

    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    #[error("column {index} name {name:?} contains a control character")]
    ControlCharacter { index: usize, name: String },

    #[error("column '{name}' is declared more than once")]
    DuplicateColumn { name: String },

    #[error("row {row} is missing field '{column}'")]
    MissingField { row: usize, column: String },

    #[error("row {row} has undeclared field '{field}'")]
    UnknownField { row: usize, field: String },

    #[error("row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} is {found}, expected {expected}")]
    RowShape {
        row: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{styles} row styles given for {rows} rows")]
    RowStyles { styles: usize, rows: usize },
}

/// A named part of the rendered table that can be styled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Border,
    Body,
    TypeLabel,
    TitleColor,
    /// Per-row override for the data row at this index.
    Row(usize),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Header => write!(f, "header"),
            Region::Border => write!(f, "border"),
            Region::Body => write!(f, "body"),
            Region::TypeLabel => write!(f, "type_label"),
            Region::TitleColor => write!(f, "title_color"),
            Region::Row(index) => write!(f, "row {}", index),
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Parse(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_error_names_token_and_region() {
        let err = TableError::Style {
            token: "ultraviolet".to_string(),
            region: Region::Border,
            reason: "unknown color or attribute 'ultraviolet'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ultraviolet"));
        assert!(msg.contains("border"));
    }

    #[test]
    fn test_schema_error_display() {
        let err: TableError = SchemaError::MissingField {
            row: 2,
            column: "Age".to_string(),
        }
        .into();
        assert!(matches!(err, TableError::Schema(_)));
        assert_eq!(err.to_string(), "schema error: row 2 is missing field 'Age'");
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::TypeLabel.to_string(), "type_label");
        assert_eq!(Region::Row(3).to_string(), "row 3");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TableError = json_err.into();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
