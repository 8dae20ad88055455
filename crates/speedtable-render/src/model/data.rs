//! Deserializable table descriptions.
//!
//! Three input shapes are accepted:
//!
//! ```text
//! structured  {"columns": [{"name": "ID", "type": "int"}, ...],
//!              "rows": [{"ID": 1, ...}, ...],
//!              "row_styles": [null, "bold_blue", ...]}     (row_styles optional)
//! records     [{"ID": 1, "Name": "Luke"}, ...]            columns from the first record
//! grid        [["1", "Luke"], ["2", "Joe"]]               columns "Col 0", "Col 1", ...
//! ```
//!
//! Field order inside JSON objects is preserved, so inferred columns appear
//! in the order the caller wrote them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{validate_columns, Cell, ColumnSpec, Row, Table};
use crate::error::{Result, SchemaError, TableError};

const STRUCTURED_FIELDS: [&str; 3] = ["columns", "rows", "row_styles"];
const OBJECT: &str = "an object";
const ARRAY: &str = "an array";

/// A column declaration as written in a table description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A raw table description, before validation.
///
/// Deserialization dispatches on the shape of the input, so a malformed
/// document is reported against the field or row that is wrong.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableData {
    /// Explicit columns plus rows keyed by column name.
    Structured {
        columns: Vec<ColumnDef>,
        rows: Vec<Map<String, Value>>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        row_styles: Vec<Option<String>>,
    },
    /// Rows keyed by field name, columns inferred from the first row.
    Records(Vec<Map<String, Value>>),
    /// Positional rows, columns inferred by position.
    Grid(Vec<Vec<Value>>),
}

impl<'de> Deserialize<'de> for TableData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TableData::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl TableData {
    /// Parses a JSON table description.
    pub fn from_json(input: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(input)?)
    }

    /// Parses a YAML table description.
    pub fn from_yaml(input: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(input)?)
    }

    /// Converts an already-parsed JSON value.
    ///
    /// An object is the structured form, an array of objects the records
    /// form and an array of arrays the grid form. The first row decides
    /// between records and grid; every later row must have the same shape.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use speedtable_render::{SchemaError, TableData, TableError};
    ///
    /// let err = TableData::from_value(json!({
    ///     "columns": [{"name": "ID"}],
    ///     "rows": [[1]]
    /// }))
    /// .unwrap_err();
    /// assert!(matches!(err, TableError::Schema(SchemaError::RowShape { row: 0, .. })));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => structured_from_map(map),
            Value::Array(items) => match items.first().map(json_kind) {
                None => Ok(TableData::Records(Vec::new())),
                Some(OBJECT) => Ok(TableData::Records(collect_objects(items)?)),
                Some(ARRAY) => Ok(TableData::Grid(collect_arrays(items)?)),
                Some(found) => Err(SchemaError::RowShape {
                    row: 0,
                    expected: "an object or an array",
                    found,
                }
                .into()),
            },
            other => Err(TableError::Parse(format!(
                "table description must be an object or an array, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Validates the description and builds a [`Table`].
    pub fn build(&self) -> Result<Table> {
        match self {
            TableData::Structured {
                columns,
                rows,
                row_styles,
            } => {
                let columns: Vec<ColumnSpec> = columns
                    .iter()
                    .map(|c| ColumnSpec::new(c.name.clone(), c.kind.as_deref()))
                    .collect();
                if row_styles.len() > rows.len() {
                    return Err(SchemaError::RowStyles {
                        styles: row_styles.len(),
                        rows: rows.len(),
                    }
                    .into());
                }
                build_from_records(columns, rows, row_styles)
            }
            TableData::Records(records) => {
                let first = records.first().ok_or(SchemaError::NoColumns)?;
                let columns = first.keys().map(|k| ColumnSpec::new(k.clone(), None)).collect();
                build_from_records(columns, records, &[])
            }
            TableData::Grid(grid) => build_from_grid(grid),
        }
    }
}

fn structured_from_map(mut map: Map<String, Value>) -> Result<TableData> {
    if let Some(field) = map.keys().find(|k| !STRUCTURED_FIELDS.contains(&k.as_str())) {
        return Err(TableError::Parse(format!(
            "unknown field '{}', expected one of: {}",
            field,
            STRUCTURED_FIELDS.join(", ")
        )));
    }

    let columns = match map.remove("columns") {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<ColumnDef>(entry)
                    .map_err(|err| TableError::Parse(format!("column {}: {}", index, err)))
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(TableError::Parse(format!(
                "'columns' must be an array, found {}",
                json_kind(&other)
            )))
        }
        None => return Err(TableError::Parse("missing field 'columns'".to_string())),
    };

    let rows = match map.remove("rows") {
        Some(Value::Array(items)) => collect_objects(items)?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(TableError::Parse(format!(
                "'rows' must be an array, found {}",
                json_kind(&other)
            )))
        }
    };

    let row_styles = match map.remove("row_styles") {
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(token) => Ok(Some(token)),
                Value::Null => Ok(None),
                other => Err(TableError::Parse(format!(
                    "row_styles[{}]: expected a style token or null, found {}",
                    index,
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(TableError::Parse(format!(
                "'row_styles' must be an array, found {}",
                json_kind(&other)
            )))
        }
    };

    Ok(TableData::Structured {
        columns,
        rows,
        row_styles,
    })
}

fn collect_objects(items: Vec<Value>) -> Result<Vec<Map<String, Value>>> {
    items
        .into_iter()
        .enumerate()
        .map(|(row, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(SchemaError::RowShape {
                row,
                expected: OBJECT,
                found: json_kind(&other),
            }
            .into()),
        })
        .collect()
}

fn collect_arrays(items: Vec<Value>) -> Result<Vec<Vec<Value>>> {
    items
        .into_iter()
        .enumerate()
        .map(|(row, item)| match item {
            Value::Array(values) => Ok(values),
            other => Err(SchemaError::RowShape {
                row,
                expected: ARRAY,
                found: json_kind(&other),
            }
            .into()),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => ARRAY,
        Value::Object(_) => OBJECT,
    }
}

fn build_from_records(
    columns: Vec<ColumnSpec>,
    records: &[Map<String, Value>],
    row_styles: &[Option<String>],
) -> Result<Table> {
    validate_columns(&columns)?;

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(field) = record
            .keys()
            .find(|k| !columns.iter().any(|c| c.name() == k.as_str()))
        {
            return Err(SchemaError::UnknownField {
                row: index,
                field: field.clone(),
            }
            .into());
        }

        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = record
                .get(column.name())
                .ok_or_else(|| SchemaError::MissingField {
                    row: index,
                    column: column.name().to_string(),
                })?;
            cells.push(to_cell(value, index, column.name())?);
        }

        let mut row = Row::new(cells);
        if let Some(Some(token)) = row_styles.get(index) {
            row = row.with_style(token.clone());
        }
        rows.push(row);
    }

    Table::new(columns, rows)
}

fn build_from_grid(grid: &[Vec<Value>]) -> Result<Table> {
    let first = grid.first().ok_or(SchemaError::NoColumns)?;
    let columns: Vec<ColumnSpec> = (0..first.len())
        .map(|i| ColumnSpec::new(format!("Col {}", i), None))
        .collect();
    validate_columns(&columns)?;

    let mut rows = Vec::with_capacity(grid.len());
    for (index, values) in grid.iter().enumerate() {
        if values.len() != columns.len() {
            return Err(SchemaError::RowLength {
                row: index,
                expected: columns.len(),
                found: values.len(),
            }
            .into());
        }
        let cells = values
            .iter()
            .zip(&columns)
            .map(|(value, column)| to_cell(value, index, column.name()))
            .collect::<Result<Vec<_>>>()?;
        rows.push(Row::new(cells));
    }

    Table::new(columns, rows)
}

fn to_cell(value: &Value, row: usize, column: &str) -> Result<Cell> {
    Cell::from_json(value).map_err(|found| TableError::TypeMismatch {
        row,
        column: column.to_string(),
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "columns": [
                {"name": "ID", "type": "int"},
                {"name": "Name", "type": "str"},
                {"name": "Age", "type": "int"}
            ],
            "rows": [
                {"ID": 1, "Name": "Luke", "Age": 21},
                {"ID": 2, "Name": "Joe", "Age": 45}
            ]
        })
    }

    #[test]
    fn test_structured_builds() {
        let table = TableData::from_value(sample()).unwrap().build().unwrap();
        assert_eq!(table.columns().len(), 3);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].cells()[1], Cell::from("Luke"));
    }

    #[test]
    fn test_row_field_order_does_not_matter() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "A"}, {"name": "B"}],
            "rows": [{"B": "b", "A": "a"}]
        }))
        .unwrap();
        let table = data.build().unwrap();
        assert_eq!(table.rows()[0].cells()[0], Cell::from("a"));
    }

    #[test]
    fn test_missing_field() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "ID", "type": "int"}, {"name": "Name"}],
            "rows": [{"ID": 1, "Name": "x"}, {"ID": 2}]
        }))
        .unwrap();
        let err = data.build().unwrap_err();
        assert!(matches!(
            err,
            TableError::Schema(SchemaError::MissingField { row: 1, ref column }) if column == "Name"
        ));
    }

    #[test]
    fn test_undeclared_field() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "ID"}],
            "rows": [{"ID": 1, "Extra": true}]
        }))
        .unwrap();
        let err = data.build().unwrap_err();
        assert!(err.to_string().contains("Extra"));
    }

    #[test]
    fn test_empty_columns() {
        let data = TableData::from_value(json!({"columns": [], "rows": []})).unwrap();
        assert!(matches!(
            data.build().unwrap_err(),
            TableError::Schema(SchemaError::NoColumns)
        ));
    }

    #[test]
    fn test_null_cell_is_type_mismatch() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "ID"}],
            "rows": [{"ID": null}]
        }))
        .unwrap();
        let err = data.build().unwrap_err();
        assert!(matches!(err, TableError::TypeMismatch { row: 0, found: "null", .. }));
    }

    #[test]
    fn test_int_under_str_column_is_fine() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "Name", "type": "str"}],
            "rows": [{"Name": 5}]
        }))
        .unwrap();
        assert!(data.build().is_ok());
    }

    #[test]
    fn test_records_infer_columns_in_order() {
        let data = TableData::from_json(r#"[{"Zeta": 1, "Alpha": "a"}, {"Zeta": 2, "Alpha": "b"}]"#)
            .unwrap();
        assert!(matches!(data, TableData::Records(_)));
        let table = data.build().unwrap();
        let names: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_grid_infers_positional_columns() {
        let data = TableData::from_value(json!([["1", "John", "23"], ["2", "Henry", "45"]])).unwrap();
        assert!(matches!(data, TableData::Grid(_)));
        let table = data.build().unwrap();
        assert_eq!(table.columns()[2].name(), "Col 2");
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_grid_ragged_row() {
        let data = TableData::from_value(json!([["1", "John"], ["2"]])).unwrap();
        assert!(matches!(
            data.build().unwrap_err(),
            TableError::Schema(SchemaError::RowLength { row: 1, .. })
        ));
    }

    #[test]
    fn test_row_styles_attach_to_rows() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "ID"}],
            "rows": [{"ID": 1}, {"ID": 2}],
            "row_styles": [null, "bold_blue"]
        }))
        .unwrap();
        let table = data.build().unwrap();
        assert_eq!(table.rows()[0].style(), None);
        assert_eq!(table.rows()[1].style(), Some("bold_blue"));
    }

    #[test]
    fn test_too_many_row_styles() {
        let data = TableData::from_value(json!({
            "columns": [{"name": "ID"}],
            "rows": [{"ID": 1}],
            "row_styles": ["red", "blue"]
        }))
        .unwrap();
        assert!(matches!(
            data.build().unwrap_err(),
            TableError::Schema(SchemaError::RowStyles { styles: 2, rows: 1 })
        ));
    }

    #[test]
    fn test_structured_rows_must_be_objects() {
        let err = TableData::from_json(r#"{"columns": [{"name": "ID"}], "rows": [[1]]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TableError::Schema(SchemaError::RowShape {
                row: 0,
                found: "an array",
                ..
            })
        ));
    }

    #[test]
    fn test_column_type_must_be_a_string() {
        let err = TableData::from_json(r#"{"columns": [{"name": "ID", "type": 5}], "rows": []}"#)
            .unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
        assert!(err.to_string().contains("column 0"));
    }

    #[test]
    fn test_misspelled_columns_field() {
        let err = TableData::from_json(r#"{"colums": [{"name": "ID"}]}"#).unwrap_err();
        assert!(err.to_string().contains("'colums'"));
    }

    #[test]
    fn test_missing_columns_field() {
        let err = TableData::from_json(r#"{"rows": []}"#).unwrap_err();
        assert!(err.to_string().contains("missing field 'columns'"));
    }

    #[test]
    fn test_records_rows_must_all_be_objects() {
        let err = TableData::from_json(r#"[{"ID": 1}, [2]]"#).unwrap_err();
        assert!(matches!(
            err,
            TableError::Schema(SchemaError::RowShape { row: 1, .. })
        ));
    }

    #[test]
    fn test_grid_rows_must_all_be_arrays() {
        let err = TableData::from_json(r#"[[1], "two"]"#).unwrap_err();
        assert!(matches!(
            err,
            TableError::Schema(SchemaError::RowShape {
                row: 1,
                found: "a string",
                ..
            })
        ));
    }

    #[test]
    fn test_scalar_rows_rejected() {
        let err = TableData::from_json("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            TableError::Schema(SchemaError::RowShape { row: 0, .. })
        ));
    }

    #[test]
    fn test_scalar_document_rejected() {
        let err = TableData::from_json("42").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_bad_row_style_entry() {
        let err = TableData::from_value(json!({
            "columns": [{"name": "ID"}],
            "rows": [{"ID": 1}],
            "row_styles": [3]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("row_styles[0]"));
    }

    #[test]
    fn test_deserialize_through_serde() {
        let data: TableData = serde_json::from_value(sample()).unwrap();
        assert!(matches!(data, TableData::Structured { .. }));
        let err = serde_json::from_value::<TableData>(json!({"columns": 1})).unwrap_err();
        assert!(err.to_string().contains("'columns' must be an array"));
    }

    #[test]
    fn test_from_yaml() {
        let data = TableData::from_yaml(
            "columns:\n  - name: ID\n    type: int\nrows:\n  - ID: 7\n",
        )
        .unwrap();
        let table = data.build().unwrap();
        assert_eq!(table.rows()[0].cells()[0], Cell::Integer(7));
    }
}
