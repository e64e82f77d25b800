//! Core types for struct-filter.
//!
//! A search result is a list of [`Row`]s; every cell is a [`Value`] that knows
//! its [`Column`], its [`RawValue`] and the [`DisplayValue`] shown to users.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use crate::config::DisplayConfig;
use crate::display;

/// One result row: column label → cell, in result column order.
pub type Row<V = Value> = IndexMap<String, V>;

/// Whether a column is backed by a schema table or synthesised by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnKind {
    /// A schema-backed column, qualified as `table.label` in filter parameters.
    #[default]
    Real,
    /// A computed column such as `%pageid%`, referenced by its raw label.
    Pseudo,
}

impl ColumnKind {
    /// Classify a label by its leading marker. Meant for loaders that build
    /// columns from untyped input; everything downstream reads the kind.
    pub fn from_label(label: &str, pseudo_marker: &str) -> Self {
        if !pseudo_marker.is_empty() && label.starts_with(pseudo_marker) {
            ColumnKind::Pseudo
        } else {
            ColumnKind::Real
        }
    }
}

/// Storage type of a column, used to format raw values for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    #[default]
    Text,
    Integer,
    Decimal,
    Date,
    DateTime,
    Checkbox,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "text"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Decimal => write!(f, "decimal"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::DateTime => write!(f, "datetime"),
            ColumnType::Checkbox => write!(f, "checkbox"),
        }
    }
}

impl std::str::FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(ColumnType::Text),
            "integer" | "int" => Ok(ColumnType::Integer),
            "decimal" | "float" | "number" => Ok(ColumnType::Decimal),
            "date" => Ok(ColumnType::Date),
            "datetime" => Ok(ColumnType::DateTime),
            "checkbox" | "bool" | "boolean" => Ok(ColumnType::Checkbox),
            other => Err(format!("unknown column type {other:?}")),
        }
    }
}

/// A result column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    label: String,
    translated_label: String,
    kind: ColumnKind,
    column_type: ColumnType,
    multi: bool,
}

impl Column {
    /// A schema-backed text column.
    pub fn new(label: impl Into<String>, translated_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            translated_label: translated_label.into(),
            kind: ColumnKind::Real,
            column_type: ColumnType::Text,
            multi: false,
        }
    }

    /// A pseudo-column such as `%pageid%`.
    pub fn pseudo(label: impl Into<String>, translated_label: impl Into<String>) -> Self {
        Self::new(label, translated_label).with_kind(ColumnKind::Pseudo)
    }

    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Storage label, used in HTML ids and filter parameter names.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Human-readable label shown as the group header.
    pub fn translated_label(&self) -> &str {
        &self.translated_label
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }
}

/// A raw, typed cell value as stored by the search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Bool(bool),
    List(Vec<RawValue>),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// What a cell looks like to a reader: one string, or several for
/// multi-valued columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayValue {
    Scalar(String),
    List(Vec<String>),
}

impl DisplayValue {
    /// True for an empty scalar or a list without any non-empty entry.
    pub fn is_empty(&self) -> bool {
        match self {
            DisplayValue::Scalar(s) => s.is_empty(),
            DisplayValue::List(items) => items.iter().all(|s| s.is_empty()),
        }
    }

    /// Non-empty entries, flattened. A scalar yields at most one item.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        let items: &[String] = match self {
            DisplayValue::Scalar(s) => std::slice::from_ref(s),
            DisplayValue::List(items) => items,
        };
        items.iter().map(String::as_str).filter(|s| !s.is_empty())
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Scalar(s.to_string())
    }
}

impl From<Vec<&str>> for DisplayValue {
    fn from(items: Vec<&str>) -> Self {
        DisplayValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// One cell of a search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    column: Column,
    raw: RawValue,
    display: DisplayValue,
}

impl Value {
    /// Wrap a raw value, formatting it with the default display settings.
    pub fn new(column: Column, raw: impl Into<RawValue>) -> Self {
        Self::with_config(column, raw, &DisplayConfig::default())
    }

    /// Wrap a raw value, formatting it with `config`.
    pub fn with_config(column: Column, raw: impl Into<RawValue>, config: &DisplayConfig) -> Self {
        let raw = raw.into();
        let display = display::format(&raw, column.column_type(), config);
        Self { column, raw, display }
    }

    /// Wrap a raw value with an already computed display value.
    pub fn with_display(column: Column, raw: RawValue, display: DisplayValue) -> Self {
        Self { column, raw, display }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn display_value(&self) -> &DisplayValue {
        &self.display
    }
}

/// A schema backing the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    table: String,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into() }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pseudo_kind_from_marker() {
        assert_eq!(ColumnKind::from_label("%pageid%", "%"), ColumnKind::Pseudo);
        assert_eq!(ColumnKind::from_label("author", "%"), ColumnKind::Real);
        assert_eq!(ColumnKind::from_label("%pageid%", ""), ColumnKind::Real);
    }

    #[test]
    fn column_type_parses_aliases() {
        assert_eq!("Int".parse::<ColumnType>(), Ok(ColumnType::Integer));
        assert_eq!("bool".parse::<ColumnType>(), Ok(ColumnType::Checkbox));
        assert!("lookup".parse::<ColumnType>().is_err());
    }

    #[test]
    fn display_entries_skip_empty_items() {
        let display = DisplayValue::from(vec!["x", "", "y"]);
        assert_eq!(display.entries().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(!display.is_empty());
        assert!(DisplayValue::from(vec!["", ""]).is_empty());
        assert!(DisplayValue::from("").is_empty());
        assert_eq!(DisplayValue::from("").entries().count(), 0);
    }

    #[test]
    fn value_formats_on_construction() {
        let column = Column::new("tags", "Tags").multi(true);
        let value = Value::new(column, vec!["a", "b"]);
        assert_eq!(
            value.display_value(),
            &DisplayValue::List(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(value.column().label(), "tags");
    }
}
