//! # Speedtable Render - Styled Box-Drawn Tables
//!
//! `speedtable-render` turns a table description (columns with declared
//! types, plus rows) and a set of region styles into a single colorized,
//! box-drawn text block for the terminal.
//!
//! ## Core Concepts
//!
//! - [`TableData`]: raw, deserializable table description (structured,
//!   records or grid form)
//! - [`Table`]: validated table model
//! - [`StyleConfig`]: one optional style token per region (header, border,
//!   body, type label, title)
//! - [`RenderOptions`] / [`Renderer`]: border set, row separators, type
//!   labels, digit grouping, plain-text output
//!
//! ## Quick Start
//!
//! ```rust
//! use speedtable_render::{render_table, StyleConfig, TableData};
//!
//! let data = TableData::from_json(r#"{
//!     "columns": [
//!         {"name": "ID", "type": "int"},
//!         {"name": "Name", "type": "str"},
//!         {"name": "Age", "type": "int"}
//!     ],
//!     "rows": [
//!         {"ID": 1, "Name": "Luke", "Age": 21},
//!         {"ID": 2, "Name": "Joe", "Age": 45}
//!     ]
//! }"#).unwrap();
//!
//! let output = render_table(&data, &StyleConfig::new()).unwrap();
//! assert_eq!(output.lines().count(), 6);
//! assert!(output.contains("┃  1 ┃ Luke ┃  21 ┃"));
//! ```
//!
//! ## Positional Styles
//!
//! Older callers pass up to six positional style values in the order
//! header, border, body, type label, title text, title color. They map onto
//! [`StyleConfig`] through [`render_table_positional`]:
//!
//! ```rust
//! use speedtable_render::{render_table_positional, TableData};
//!
//! let data = TableData::from_json(r#"[["1", "John"], ["2", "Henry"]]"#).unwrap();
//! let output = render_table_positional(&data, &["red", "green", "yellow"]).unwrap();
//! assert!(output.contains("\x1b[32m"));
//!
//! let err = render_table_positional(&data, &["red", "ultraviolet"]).unwrap_err();
//! assert!(err.to_string().contains("ultraviolet"));
//! assert!(err.to_string().contains("border"));
//! ```

mod error;
pub mod model;
mod render;
pub mod style;
pub mod tabular;

pub use error::{Region, Result, SchemaError, TableError};
pub use model::{Cell, ColumnSpec, Row, Table, TableBuilder, TableData};
pub use render::{OutputMode, RenderOptions, Renderer, TypeLabels};
pub use style::StyleConfig;
pub use tabular::BorderStyle;

/// Builds and renders a table description with default options.
///
/// Fails with [`TableError::Schema`] or [`TableError::TypeMismatch`] for bad
/// data and [`TableError::Style`] for unknown style tokens. No partial output
/// is ever returned.
pub fn render_table(data: &TableData, styles: &StyleConfig) -> Result<String> {
    let table = data.build()?;
    Renderer::default().render(&table, styles)
}

/// Renders with legacy positional style arguments.
///
/// Accepts 0 to 6 values: header, border, body, type label, title text,
/// title color. See [`StyleConfig::from_positional`].
pub fn render_table_positional<S: AsRef<str>>(data: &TableData, args: &[S]) -> Result<String> {
    let styles = StyleConfig::from_positional(args)?;
    render_table(data, &styles)
}
