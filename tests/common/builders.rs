//! Test builders — ergonomic constructors for searches and rendered forms.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use struct_filter::model::{Column, DisplayValue, RawValue, Row, Schema, Value};
use struct_filter::{FilterForm, InMemorySearch, Lang};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`InMemorySearch`] fixtures.
///
/// # Example
///
/// ```rust
/// let search = SearchBuilder::new("books")
///     .column(Column::new("author", "Author"))
///     .row(&[("author", "Ann".into())])
///     .build();
/// ```
pub struct SearchBuilder {
    schemas: Vec<Schema>,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl SearchBuilder {
    pub fn new(schema: &str) -> Self {
        Self {
            schemas: vec![Schema::new(schema)],
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// A search that reports no schema at all.
    pub fn without_schema() -> Self {
        Self {
            schemas: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a row of `(column label, display value)` cells. Labels must have
    /// been declared with [`SearchBuilder::column`].
    pub fn row(mut self, cells: &[(&str, DisplayValue)]) -> Self {
        let row = cells
            .iter()
            .map(|(label, display)| {
                let column = self
                    .columns
                    .iter()
                    .find(|c| c.label() == *label)
                    .unwrap_or_else(|| panic!("column {label:?} not declared"))
                    .clone();
                (
                    label.to_string(),
                    Value::with_display(column, RawValue::Null, display.clone()),
                )
            })
            .collect();
        self.rows.push(row);
        self
    }

    /// Add one single-cell row per value.
    pub fn rows_for(mut self, label: &str, values: &[&str]) -> Self {
        for v in values {
            self = self.row(&[(label, DisplayValue::from(*v))]);
        }
        self
    }

    pub fn build(self) -> InMemorySearch {
        InMemorySearch::new(self.schemas, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Strings that are easy to find in rendered output.
pub fn test_lang() -> Lang {
    Lang::new("Filter results", "Pick a value.", "Apply filter")
}

/// Render `search` with [`test_lang`] into a fresh document.
pub fn render(search: &InMemorySearch) -> String {
    let mut doc = String::new();
    FilterForm::new(search)
        .expect("search executes")
        .render("wiki:books", &test_lang(), &mut doc)
        .expect("form renders");
    doc
}
