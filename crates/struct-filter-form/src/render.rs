//! The filter form renderer.
//!
//! [`FilterForm::new`] runs the search once and keeps its rows.
//! [`FilterForm::render`] turns them into a GET form: one collapsible group
//! per column, one radio button per distinct value, each named as a
//! "contains" filter on that column.
//!
//! The markup reuses the structure of the wiki's advanced search tools
//! (`advancedOptions`, `toggle`, `current`) so the core grouping styles and
//! scripts apply to it unchanged.

use std::fmt;

use struct_filter_core::{
    aggregate, ColumnValueMap, FilterConfig, FilterError, FilterOperator, FilterParam,
    QualifiedColumn, Result, Row, SchemaDescriptor, SearchEngine,
};

use crate::lang::Lang;
use crate::markup::{FormBuilder, HtmlForm};

/// A filter form over one executed search.
pub struct FilterForm<'a, S: SearchEngine> {
    search: &'a S,
    rows: Vec<Row<S::Value>>,
    config: FilterConfig,
}

impl<'a, S: SearchEngine> FilterForm<'a, S> {
    /// Execute `search` and keep its rows, using the default configuration.
    pub fn new(search: &'a S) -> Result<Self> {
        Self::with_config(search, FilterConfig::defaults())
    }

    pub fn with_config(search: &'a S, config: FilterConfig) -> Result<Self> {
        let rows = search.execute()?;
        tracing::debug!(rows = rows.len(), "filter search executed");
        Ok(Self { search, rows, config })
    }

    pub fn rows(&self) -> &[Row<S::Value>] {
        &self.rows
    }

    /// Distinct display values per column of the cached result.
    pub fn column_values(&self) -> ColumnValueMap {
        aggregate(&self.rows)
    }

    /// Render with an [`HtmlForm`] and append the markup to `sink`.
    pub fn render<W: fmt::Write>(&self, page_id: &str, lang: &Lang, sink: &mut W) -> Result<()> {
        self.render_with(HtmlForm::get(), page_id, lang, sink)
    }

    /// Render with a caller supplied builder and append its markup to `sink`.
    ///
    /// Nothing is written when building or serialising fails.
    pub fn render_with<F: FormBuilder, W: fmt::Write>(
        &self,
        mut form: F,
        page_id: &str,
        lang: &Lang,
        sink: &mut W,
    ) -> Result<()> {
        self.build(&mut form, page_id, lang)?;
        let html = form.to_html()?;
        sink.write_str(&html)?;
        Ok(())
    }

    /// Emit the filter form into `form`.
    pub fn build<F: FormBuilder>(&self, form: &mut F, page_id: &str, lang: &Lang) -> Result<()> {
        let schema = self
            .search
            .schemas()
            .first()
            .map(|s| s.table().to_string())
            .ok_or(FilterError::NoSchema)?;
        let operator = FilterOperator::from_token(&self.config.filter.operator).ok_or_else(|| {
            FilterError::Config(format!(
                "unknown filter operator {:?}",
                self.config.filter.operator
            ))
        })?;
        let cfg = &self.config.form;
        let col_values = self.column_values();

        form.form().add_class(&cfg.form_class);
        form.set_hidden_field("id", page_id);

        form.fieldset_open().add_class(&cfg.fieldset_class);
        form.add_html(&format!("<legend>{}</legend>", lang.title));
        form.add_html(&format!("<p>{}</p>", lang.intro));

        form.tag_open("div").add_class(&cfg.options_class);

        for (col_name, col) in &col_values {
            let param = FilterParam::new(
                self.config.filter.param_prefix.as_str(),
                QualifiedColumn::new(&schema, col_name, col.kind),
                operator,
            )
            .name();

            form.tag_open("div")
                .add_class("toggle")
                .id(&format!("__filter-{col_name}"))
                .attr("aria-haspopup", "true");

            // popup toggler
            form.tag_open("div").add_class("current");
            form.add_text(&col.label);
            form.tag_close("div");

            form.tag_open("ul").attr("aria-expanded", "false");
            for (i, value) in col.values.iter().enumerate() {
                let id = format!("__{schema}.{col_name}-{i}");
                form.tag_open("li");
                form.radio_button(&param).val(value).id(&id);
                form.label(value, &id).attr("title", value);
                form.tag_close("li");
            }
            form.tag_close("ul");
            form.tag_close("div");
        }

        form.button(&cfg.submit_name, &lang.button)
            .attr("type", "submit")
            .add_class(&cfg.submit_class);

        form.tag_close("div");
        form.fieldset_close();

        tracing::debug!(
            page = page_id,
            schema = %schema,
            columns = col_values.len(),
            "filter form built"
        );
        Ok(())
    }
}

/// Execute `search` and append its filter form to `sink` in one call.
pub fn render_filter<S: SearchEngine, W: fmt::Write>(
    search: &S,
    page_id: &str,
    lang: &Lang,
    sink: &mut W,
) -> Result<()> {
    FilterForm::new(search)?.render(page_id, lang, sink)
}
