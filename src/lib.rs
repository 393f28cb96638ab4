//! Extracts recipes from NYT Cooking pages and renders them as
//! self-contained HTML documents or plaintext summaries.
//!
//! The extraction core is pure and infallible: [`Recipe::from_markup`]
//! always produces a `Recipe`, degrading missing markup fragments to empty
//! fields with a warning. Fetching the page and writing the output are the
//! fallible collaborators around it.

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
mod render;

use std::time::Duration;

use log::debug;

pub use crate::config::Settings;
pub use crate::error::ImportError;
pub use crate::extractors::{Diagnostic, Diagnostics, Extraction, Extractor, RecipeSchema};
pub use crate::model::Recipe;

/// Fetch the raw markup of a recipe page.
pub fn fetch_markup(url: &str) -> Result<String, ImportError> {
    let settings = Settings::default();
    fetch_markup_with_settings(url, &settings)
}

/// Fetch the raw markup of a recipe page with explicit settings.
pub fn fetch_markup_with_settings(url: &str, settings: &Settings) -> Result<String, ImportError> {
    debug!("fetching from {url}");

    let body = reqwest::blocking::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_secs(settings.timeout))
        .build()?
        .get(url)
        .send()?
        .text()?;

    Ok(body)
}
