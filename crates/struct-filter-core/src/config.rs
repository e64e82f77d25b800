//! Configuration types for struct-filter.
//!
//! [`FilterConfig::load`] layers an optional user TOML file on top of the
//! embedded defaults. [`FilterConfig::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::Path;

use crate::error::{FilterError, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[filter]
param_prefix  = "flt"
pseudo_marker = "%"
operator      = "*~"

[form]
form_class     = "struct-filter-form search-results-form"
fieldset_class = "struct-filter-form search-form"
options_class  = "advancedOptions"
submit_name    = "struct-filter-submit"
submit_class   = "struct-filter-submit"

[display]
date_format     = "%Y-%m-%d"
datetime_format = "%Y-%m-%d %H:%M"
yes             = "yes"
no              = "no"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filter: ParamConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// `[filter]` section: how filter parameters are named.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamConfig {
    /// Query-string key the search engine reads filters from.
    #[serde(default = "default_param_prefix")]
    pub param_prefix: String,
    /// Leading character that marks a pseudo-column label such as `%pageid%`.
    #[serde(default = "default_pseudo_marker")]
    pub pseudo_marker: String,
    /// Comparator appended to every radio's parameter name.
    #[serde(default = "default_operator")]
    pub operator: String,
}

fn default_param_prefix() -> String { "flt".to_string() }
fn default_pseudo_marker() -> String { "%".to_string() }
fn default_operator() -> String { "*~".to_string() }

impl Default for ParamConfig {
    fn default() -> Self {
        Self {
            param_prefix: default_param_prefix(),
            pseudo_marker: default_pseudo_marker(),
            operator: default_operator(),
        }
    }
}

/// `[form]` section: class names and the submit button identity.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_class")]
    pub form_class: String,
    #[serde(default = "default_fieldset_class")]
    pub fieldset_class: String,
    #[serde(default = "default_options_class")]
    pub options_class: String,
    #[serde(default = "default_submit_name")]
    pub submit_name: String,
    #[serde(default = "default_submit_class")]
    pub submit_class: String,
}

fn default_form_class() -> String { "struct-filter-form search-results-form".to_string() }
fn default_fieldset_class() -> String { "struct-filter-form search-form".to_string() }
fn default_options_class() -> String { "advancedOptions".to_string() }
fn default_submit_name() -> String { "struct-filter-submit".to_string() }
fn default_submit_class() -> String { "struct-filter-submit".to_string() }

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_class: default_form_class(),
            fieldset_class: default_fieldset_class(),
            options_class: default_options_class(),
            submit_name: default_submit_name(),
            submit_class: default_submit_class(),
        }
    }
}

/// `[display]` section: how raw cell values become display strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_yes")]
    pub yes: String,
    #[serde(default = "default_no")]
    pub no: String,
}

fn default_date_format() -> String { "%Y-%m-%d".to_string() }
fn default_datetime_format() -> String { "%Y-%m-%d %H:%M".to_string() }
fn default_yes() -> String { "yes".to_string() }
fn default_no() -> String { "no".to_string() }

impl DisplayConfig {
    /// Reject date and datetime formats chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        for (key, fmt) in [
            ("date_format", &self.date_format),
            ("datetime_format", &self.datetime_format),
        ] {
            if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                return Err(FilterError::Config(format!(
                    "display.{key}: invalid strftime format {fmt:?}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            yes: default_yes(),
            no: default_no(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            filter: ParamConfig::default(),
            form: FormConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl FilterConfig {
    /// Load the embedded defaults, overlaid with `path` when given. A missing
    /// user file is an error; a missing key falls back to its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading filter config");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.display.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse a config from a TOML string layered over the defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.display.validate()?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
