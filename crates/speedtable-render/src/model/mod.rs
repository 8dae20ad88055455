//! Validated table model.
//!
//! A [`Table`] is an ordered list of [`ColumnSpec`]s and an ordered list of
//! [`Row`]s, each holding exactly one [`Cell`] per column. Tables are built
//! either from deserialized [`TableData`] or programmatically with
//! [`TableBuilder`]; both paths run the same validation, so a `Table` that
//! exists is always well-formed.
//!
//! ```rust
//! use speedtable_render::model::{Cell, Table};
//!
//! let table = Table::builder()
//!     .column("ID", Some("int"))
//!     .column("Name", Some("str"))
//!     .row(vec![Cell::from(1), Cell::from("Luke")])
//!     .row_styled(vec![Cell::from(2), Cell::from("Joe")], "bold_blue")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.columns().len(), 2);
//! assert_eq!(table.rows()[1].style(), Some("bold_blue"));
//! ```

mod data;

pub use data::{ColumnDef, TableData};

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SchemaError};
use crate::tabular::ColumnType;

/// A declared column: display label plus formatting policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    name: String,
    tag: Option<String>,
    kind: ColumnType,
}

impl ColumnSpec {
    /// Creates a column from its label and optional declared type tag.
    pub fn new(name: impl Into<String>, tag: Option<&str>) -> Self {
        let tag = tag.map(str::trim).filter(|t| !t.is_empty());
        ColumnSpec {
            name: name.into(),
            tag: tag.map(str::to_string),
            kind: ColumnType::from_tag(tag),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type tag exactly as declared, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn kind(&self) -> ColumnType {
        self.kind
    }
}

/// A single scalar cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Converts a JSON value into a cell.
    ///
    /// Returns the JSON kind name on failure: null, arrays and objects have
    /// no single-line text form.
    pub fn from_json(value: &serde_json::Value) -> std::result::Result<Self, &'static str> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Cell::Text(s.clone())),
            Value::Bool(b) => Ok(Cell::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Cell::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Cell::Unsigned(u))
                } else {
                    n.as_f64().map(Cell::Float).ok_or("number")
                }
            }
            Value::Null => Err("null"),
            Value::Array(_) => Err("array"),
            Value::Object(_) => Err("object"),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Unsigned(u) => write!(f, "{}", u),
            Cell::Float(x) if x.is_nan() => f.write_str("NaN"),
            Cell::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
            }
            // Integral floats keep a trailing `.0` so they stay visibly floats.
            Cell::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Integer(v as i64)
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::Unsigned(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

/// One data row: a cell per column plus an optional style override token.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
    style: Option<String>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells, style: None }
    }

    /// Sets a style token that replaces the body style for this row only.
    pub fn with_style(mut self, token: impl Into<String>) -> Self {
        self.style = Some(token.into());
        self
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

/// A validated table.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Row>,
}

impl Table {
    /// Validates columns and rows and assembles a table.
    ///
    /// Fails if there are no columns, a column name is empty or repeated, or a
    /// row does not hold exactly one cell per column.
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<Row>) -> Result<Self> {
        validate_columns(&columns)?;
        for (index, row) in rows.iter().enumerate() {
            if row.cells.len() != columns.len() {
                return Err(SchemaError::RowLength {
                    row: index,
                    expected: columns.len(),
                    found: row.cells.len(),
                }
                .into());
            }
        }
        Ok(Table { columns, rows })
    }

    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

pub(crate) fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    if columns.is_empty() {
        return Err(SchemaError::NoColumns.into());
    }
    let mut seen = HashSet::new();
    for (index, column) in columns.iter().enumerate() {
        if column.name.is_empty() {
            return Err(SchemaError::EmptyColumnName { index }.into());
        }
        if column.name.chars().any(char::is_control) {
            return Err(SchemaError::ControlCharacter {
                index,
                name: column.name.clone(),
            }
            .into());
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SchemaError::DuplicateColumn {
                name: column.name.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Fluent builder for [`Table`].
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    columns: Vec<ColumnSpec>,
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Adds a column with an optional declared type tag.
    pub fn column(mut self, name: impl Into<String>, tag: Option<&str>) -> Self {
        self.columns.push(ColumnSpec::new(name, tag));
        self
    }

    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(Row::new(cells));
        self
    }

    /// Adds a row whose cells use `token` instead of the body style.
    pub fn row_styled(mut self, cells: Vec<Cell>, token: impl Into<String>) -> Self {
        self.rows.push(Row::new(cells).with_style(token));
        self
    }

    pub fn build(self) -> Result<Table> {
        Table::new(self.columns, self.rows)
    }
}
