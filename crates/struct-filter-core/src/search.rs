//! Search collaborators.
//!
//! Query execution lives outside this crate. The filter form only needs a
//! handful of capabilities from a search, captured by the traits below, so
//! any engine can plug in by implementing them. [`InMemorySearch`] is the
//! implementation used by the loaders, the CLI and the tests.

use crate::error::Result;
use crate::types::{Column, ColumnKind, DisplayValue, Row, Schema, Value};

/// A column as seen by the filter form.
pub trait ResultColumn {
    /// Storage label, used as HTML identifier.
    fn label(&self) -> &str;
    /// Display label for the group header.
    fn translated_label(&self) -> &str;
    fn kind(&self) -> ColumnKind;
}

/// A result cell as seen by the filter form.
pub trait ResultValue {
    type Column: ResultColumn;

    fn column(&self) -> &Self::Column;
    fn display_value(&self) -> &DisplayValue;
}

/// A schema descriptor.
pub trait SchemaDescriptor {
    fn table(&self) -> &str;
}

/// A search whose results the filter form is built from.
pub trait SearchEngine {
    type Value: ResultValue;
    type Schema: SchemaDescriptor;

    /// Run the search and return its rows.
    fn execute(&self) -> Result<Vec<Row<Self::Value>>>;

    /// Schemas the search reads from, in declaration order.
    fn schemas(&self) -> &[Self::Schema];
}

impl ResultColumn for Column {
    fn label(&self) -> &str {
        Column::label(self)
    }

    fn translated_label(&self) -> &str {
        Column::translated_label(self)
    }

    fn kind(&self) -> ColumnKind {
        Column::kind(self)
    }
}

impl ResultValue for Value {
    type Column = Column;

    fn column(&self) -> &Column {
        Value::column(self)
    }

    fn display_value(&self) -> &DisplayValue {
        Value::display_value(self)
    }
}

impl SchemaDescriptor for Schema {
    fn table(&self) -> &str {
        Schema::table(self)
    }
}

/// A search over rows that were computed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemorySearch {
    schemas: Vec<Schema>,
    rows: Vec<Row>,
}

impl InMemorySearch {
    pub fn new(schemas: Vec<Schema>, rows: Vec<Row>) -> Self {
        Self { schemas, rows }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl SearchEngine for InMemorySearch {
    type Value = Value;
    type Schema = Schema;

    fn execute(&self) -> Result<Vec<Row>> {
        tracing::debug!(rows = self.rows.len(), schemas = self.schemas.len(), "executing in-memory search");
        Ok(self.rows.clone())
    }

    fn schemas(&self) -> &[Schema] {
        &self.schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Row;

    #[test]
    fn in_memory_search_returns_rows_in_order() {
        let title = Column::new("title", "Title");
        let mut search = InMemorySearch::default().with_schema(Schema::new("books"));
        for t in ["Dune", "Emma"] {
            let mut row = Row::new();
            row.insert("title".to_string(), Value::new(title.clone(), t));
            search.push_row(row);
        }

        let rows = search.execute().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["title"].display_value(), &DisplayValue::from("Emma"));
        assert_eq!(SearchEngine::schemas(&search)[0].table(), "books");
    }
}
