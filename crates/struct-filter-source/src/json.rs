//! JSON result dumps.
//!
//! ```json
//! {
//!   "schemas": ["books"],
//!   "columns": [
//!     {"label": "author", "translated": "Author"},
//!     {"label": "tags", "type": "text", "multi": true},
//!     {"label": "%pageid%", "translated": "Page"}
//!   ],
//!   "rows": [{"author": "Ann", "tags": ["sf", "classic"], "%pageid%": "books:dune"}]
//! }
//! ```
//!
//! Cells are converted according to their column's type. Missing cells are
//! null, cells for undeclared columns are an error.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value as Json;

use struct_filter_core::{
    Column, ColumnKind, ColumnType, FilterConfig, FilterError, InMemorySearch, RawValue, Result,
    Row, Schema, Value,
};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Deserialize)]
struct Dump {
    schemas: Vec<String>,
    columns: Vec<ColumnSpec>,
    #[serde(default)]
    rows: Vec<serde_json::Map<String, Json>>,
}

#[derive(Debug, Deserialize)]
struct ColumnSpec {
    label: String,
    #[serde(default)]
    translated: Option<String>,
    #[serde(default, rename = "type")]
    column_type: Option<String>,
    #[serde(default)]
    multi: bool,
    #[serde(default)]
    pseudo: Option<bool>,
}

impl ColumnSpec {
    fn into_column(self, pseudo_marker: &str) -> Result<Column> {
        let column_type = match &self.column_type {
            Some(ty) => ty
                .parse::<ColumnType>()
                .map_err(|e| FilterError::Source(format!("column {:?}: {e}", self.label)))?,
            None => ColumnType::Text,
        };
        let marked = ColumnKind::from_label(&self.label, pseudo_marker);
        let kind = match self.pseudo {
            // filter names only identify pseudo-columns by their marker
            Some(true) if marked != ColumnKind::Pseudo => {
                return Err(FilterError::Source(format!(
                    "column {:?} is flagged pseudo but does not start with {pseudo_marker:?}",
                    self.label
                )))
            }
            Some(true) => ColumnKind::Pseudo,
            Some(false) => ColumnKind::Real,
            None => marked,
        };
        let translated = self.translated.unwrap_or_else(|| self.label.clone());
        Ok(Column::new(self.label, translated)
            .with_kind(kind)
            .with_type(column_type)
            .multi(self.multi))
    }
}

/// Load a dump from a JSON string.
pub fn from_str(src: &str, config: &FilterConfig) -> Result<InMemorySearch> {
    let dump: Dump = serde_json::from_str(src)?;
    build(dump, config)
}

/// Load a dump from a reader.
pub fn from_reader<R: Read>(reader: R, config: &FilterConfig) -> Result<InMemorySearch> {
    let dump: Dump = serde_json::from_reader(reader)?;
    build(dump, config)
}

/// Load a dump from a file.
pub fn from_path(path: &Path, config: &FilterConfig) -> Result<InMemorySearch> {
    tracing::debug!(path = %path.display(), "loading result dump");
    let file = std::fs::File::open(path)?;
    from_reader(std::io::BufReader::new(file), config)
}

fn build(dump: Dump, config: &FilterConfig) -> Result<InMemorySearch> {
    let columns = dump
        .columns
        .into_iter()
        .map(|spec| spec.into_column(&config.filter.pseudo_marker))
        .collect::<Result<Vec<_>>>()?;
    let schemas = dump.schemas.into_iter().map(Schema::new).collect();

    let mut rows = Vec::with_capacity(dump.rows.len());
    for (index, cells) in dump.rows.into_iter().enumerate() {
        if let Some(unknown) = cells
            .keys()
            .find(|key| !columns.iter().any(|c| c.label() == key.as_str()))
        {
            return Err(FilterError::Source(format!(
                "row {index}: undeclared column {unknown:?}"
            )));
        }

        let mut row = Row::new();
        for column in &columns {
            let raw = match cells.get(column.label()) {
                Some(cell) => convert(cell, column.column_type())
                    .map_err(|e| FilterError::Source(format!("row {index}, column {:?}: {e}", column.label())))?,
                None => RawValue::Null,
            };
            row.insert(
                column.label().to_string(),
                Value::with_config(column.clone(), raw, &config.display),
            );
        }
        rows.push(row);
    }

    tracing::debug!(columns = columns.len(), rows = rows.len(), "result dump loaded");
    Ok(InMemorySearch::new(schemas, rows))
}

fn convert(cell: &Json, column_type: ColumnType) -> std::result::Result<RawValue, String> {
    match cell {
        Json::Null => Ok(RawValue::Null),
        Json::Array(items) => items
            .iter()
            .map(|item| convert(item, column_type))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(RawValue::List),
        Json::Object(_) => Err("objects are not valid cell values".to_string()),
        scalar => convert_scalar(scalar, column_type),
    }
}

fn convert_scalar(cell: &Json, column_type: ColumnType) -> std::result::Result<RawValue, String> {
    match (column_type, cell) {
        (ColumnType::Text, Json::String(s)) => Ok(RawValue::Text(s.clone())),
        (ColumnType::Text, other) => Ok(RawValue::Text(other.to_string())),

        (ColumnType::Integer, Json::Number(n)) => n
            .as_i64()
            .map(RawValue::Integer)
            .ok_or_else(|| format!("{n} is not an integer")),
        (ColumnType::Integer, Json::String(s)) => s
            .trim()
            .parse()
            .map(RawValue::Integer)
            .map_err(|_| format!("{s:?} is not an integer")),

        (ColumnType::Decimal, Json::Number(n)) => n
            .as_f64()
            .map(RawValue::Decimal)
            .ok_or_else(|| format!("{n} is not a number")),
        (ColumnType::Decimal, Json::String(s)) => s
            .trim()
            .parse()
            .map(RawValue::Decimal)
            .map_err(|_| format!("{s:?} is not a number")),

        (ColumnType::Date, Json::String(s)) => parse_date(s),
        (ColumnType::DateTime, Json::String(s)) => parse_datetime(s),

        (ColumnType::Checkbox, Json::Bool(b)) => Ok(RawValue::Bool(*b)),
        (ColumnType::Checkbox, Json::Number(n)) => Ok(RawValue::Bool(n.as_f64() != Some(0.0))),
        (ColumnType::Checkbox, Json::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(RawValue::Null),
            "1" | "true" | "yes" | "on" => Ok(RawValue::Bool(true)),
            "0" | "false" | "no" | "off" => Ok(RawValue::Bool(false)),
            other => Err(format!("{other:?} is not a checkbox value")),
        },

        (ty, other) => Err(format!("{other} is not a valid {ty} value")),
    }
}

fn parse_date(s: &str) -> std::result::Result<RawValue, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(RawValue::Null);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(RawValue::Date)
        .or_else(|_| parse_datetime(s))
        .map_err(|_| format!("{s:?} is not a date"))
}

fn parse_datetime(s: &str) -> std::result::Result<RawValue, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(RawValue::Null);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(RawValue::DateTime)
        .ok_or_else(|| format!("{s:?} is not a datetime"))
}
