//! struct-filter-core — data model and aggregation for struct filter forms.
//!
//! This crate holds everything the filter form needs that is not markup:
//! the result types, the collaborator traits a search engine implements,
//! the column value aggregator and the filter parameter codec.
//!
//! # Pipeline
//!
//! ```text
//! SearchEngine::execute ──► aggregate ──► ColumnValueMap ──► (form crate renders)
//!                                              │
//!                                 FilterParam names each radio
//! ```

pub mod aggregate;
pub mod config;
pub mod display;
pub mod error;
pub mod param;
pub mod search;
pub mod types;

pub use aggregate::{aggregate, ColumnValueMap, ColumnValues};
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use param::{FilterOperator, FilterParam, QualifiedColumn};
pub use search::{InMemorySearch, ResultColumn, ResultValue, SchemaDescriptor, SearchEngine};
pub use types::{Column, ColumnKind, ColumnType, DisplayValue, RawValue, Row, Schema, Value};
