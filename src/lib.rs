//! struct-filter — filter forms for structured-data search results.
//!
//! This crate re-exports the three layers so integration tests and embedders
//! can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! source ──► core ──► form
//!  (dump)   (search, aggregate, params)   (markup, lang, renderer)
//! ```
//!
//! Rendering is a single synchronous pass: execute the search, aggregate the
//! distinct values per column, emit the form, append it to the caller's sink.

pub use struct_filter_core as model;
pub use struct_filter_form as form;
pub use struct_filter_source as source;

pub use struct_filter_core::{FilterConfig, FilterError, InMemorySearch, Result, SearchEngine};
pub use struct_filter_form::{render_filter, FilterForm, Lang};
