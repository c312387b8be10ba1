use std::fmt;

use serde::Serialize;
use sqlx::{Column, Row, TypeInfo, ValueRef, sqlite::SqliteRow};

/// Key columns every child table carries; they are not shown.
const HIDDEN_COLUMNS: [&str; 2] = ["id", "project_id"];

/// A single SQLite value, typed by what is stored rather than by the declared column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Real(v) => write!(f, "{v}"),
            Cell::Text(v) => f.write_str(v),
            Cell::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Cell,
}

/// Look up a field by column name.
pub fn field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Cell> {
    fields.iter().find(|f| f.name == name).map(|f| &f.value)
}

fn read_cell(row: &SqliteRow, index: usize) -> Result<Cell, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Cell::Null);
    }
    // Dispatch on the storage class of the value, not the declared column type.
    let storage = raw.type_info().name().to_string();
    match storage.as_str() {
        "INTEGER" => row.try_get(index).map(Cell::Integer),
        "REAL" => row.try_get(index).map(Cell::Real),
        "BLOB" => row.try_get(index).map(Cell::Blob),
        _ => row.try_get(index).map(Cell::Text),
    }
}

/// Every column of `row` except the key columns, in select order.
pub(super) fn display_fields(row: &SqliteRow) -> Result<Vec<Field>, sqlx::Error> {
    row.columns()
        .iter()
        .filter(|column| !HIDDEN_COLUMNS.contains(&column.name()))
        .map(|column| {
            Ok(Field {
                name: column.name().to_string(),
                value: read_cell(row, column.ordinal())?,
            })
        })
        .collect()
}
