//! struct-filter-source — result sources for struct-filter.
//!
//! Query execution happens elsewhere; a source turns an already computed
//! result into an [`InMemorySearch`](struct_filter_core::InMemorySearch) that
//! the filter form can render.

pub mod json;
