//! struct-filter-form — markup for struct filter forms.
//!
//! [`markup`] holds the [`FormBuilder`](markup::FormBuilder) seam and its HTML
//! implementation, [`lang`] the user-facing strings and [`render`] the filter
//! form itself.

pub mod lang;
pub mod markup;
pub mod render;

pub use lang::Lang;
pub use markup::{Element, ElementKind, FormBuilder, HtmlForm};
pub use render::{render_filter, FilterForm};
