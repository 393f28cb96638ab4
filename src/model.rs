use serde::Serialize;

use crate::extractors::Extractor;
use crate::render;

/// A recipe extracted from an NYT Cooking page.
///
/// Every field is always present: when the source markup is missing a
/// fragment, the corresponding field degrades to an empty string or an
/// empty list rather than an `Option`. Ingredient and instruction order
/// follows document order. The value is constructed once by the extractor
/// and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub serving_size: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Extract a recipe from raw page markup using the current schema.
    ///
    /// Never fails: missing fragments degrade to empty fields and are
    /// reported through `log::warn!`. Use [`Extractor::parse`] directly to
    /// inspect the diagnostics.
    pub fn from_markup(raw: &str) -> Recipe {
        Extractor::new().parse(raw).into_recipe()
    }

    /// Render the recipe as a self-contained HTML document.
    pub fn to_html(&self) -> String {
        render::to_html(self)
    }

    /// Render the recipe as a plaintext summary.
    pub fn to_plaintext(&self) -> String {
        render::to_plaintext(self)
    }
}
