//! Language strings for the filter form.
//!
//! Bundles are TOML files with a `[filter]` table. English and German are
//! embedded via [`include_str!`] so the renderer works without any files on
//! disk; [`Lang::load_file`] reads a user supplied bundle.
//!
//! Title and intro are trusted plugin strings and may contain markup.

use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;

const EN_SRC: &str = include_str!("lang/en.toml");
const DE_SRC: &str = include_str!("lang/de.toml");

#[derive(Debug, Deserialize)]
struct RawBundle {
    filter: Lang,
}

/// The strings a filter form needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lang {
    /// Fieldset legend.
    pub title: String,
    /// Paragraph under the legend.
    pub intro: String,
    /// Submit button content.
    pub button: String,
}

impl Lang {
    pub fn new(title: impl Into<String>, intro: impl Into<String>, button: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: intro.into(),
            button: button.into(),
        }
    }

    /// The embedded English bundle.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn english() -> Self {
        Self::from_toml_str(EN_SRC).expect("embedded English strings must be valid TOML")
    }

    /// The embedded bundle for `code`, falling back to English for unknown
    /// codes. Region suffixes are ignored (`de-CH` → `de`).
    pub fn load(code: &str) -> Self {
        let base = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let src = match base.as_str() {
            "en" => EN_SRC,
            "de" => DE_SRC,
            _ => {
                tracing::warn!(lang = code, "no embedded strings for language, using English");
                EN_SRC
            }
        };
        Self::from_toml_str(src).unwrap_or_else(|e| {
            tracing::warn!(lang = code, error = %e, "embedded strings unreadable, using English");
            Self::english()
        })
    }

    /// Parse a bundle from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawBundle = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(raw.filter)
    }

    /// Read a bundle from a TOML file.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let raw: RawBundle = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(raw.filter)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::english()
    }
}
