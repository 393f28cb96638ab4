use std::fmt;

use log::warn;
use scraper::Html;

use crate::model::Recipe;

mod pantry;

pub use self::pantry::PantrySchema;

/// A non-fatal notice emitted when an expected markup fragment is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    MissingTitle,
    MissingServingSize,
    MissingIngredients,
    MissingInstructions,
    StepMissingText,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTitle => write!(f, "recipe is missing a title"),
            Diagnostic::MissingServingSize => write!(f, "recipe is missing a serving size"),
            Diagnostic::MissingIngredients => write!(f, "recipe is missing ingredients"),
            Diagnostic::MissingInstructions => write!(f, "recipe is missing instructions"),
            Diagnostic::StepMissingText => write!(f, "instruction is missing text"),
        }
    }
}

/// Ordered collection of the notices emitted during one extraction.
///
/// Each notice is mirrored to `log::warn!` at push time; the collection
/// itself is what callers and tests inspect.
#[derive(Debug, Default)]
pub struct Diagnostics {
    notices: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Record a notice, mirroring it to the log.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.notices.push(diagnostic);
    }

    pub fn notices(&self) -> &[Diagnostic] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// One markup schema version of the target site.
///
/// The site's class names are build-generated with volatile suffixes, so a
/// schema implementation matches them by prefix pattern rather than
/// equality. Each method is independently fault-tolerant: a missing
/// fragment records a [`Diagnostic`] and yields the empty default.
pub trait RecipeSchema {
    fn title(&self, document: &Html, diagnostics: &mut Diagnostics) -> String;

    fn serving_size(&self, document: &Html, diagnostics: &mut Diagnostics) -> String;

    fn ingredients(&self, document: &Html, diagnostics: &mut Diagnostics) -> Vec<String>;

    fn instructions(&self, document: &Html, diagnostics: &mut Diagnostics) -> Vec<String>;
}

/// Result of one extraction: the recipe plus the notices collected while
/// producing it.
#[derive(Debug)]
pub struct Extraction {
    recipe: Recipe,
    diagnostics: Diagnostics,
}

impl Extraction {
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}

/// Extracts a [`Recipe`] from raw page markup.
///
/// Tied to a single [`RecipeSchema`] chosen at construction time; when the
/// site ships a new markup version, a new schema implementation is swapped
/// in here without touching the data model or the renderers.
pub struct Extractor {
    schema: Box<dyn RecipeSchema>,
}

impl Extractor {
    /// An extractor for the current NYT Cooking markup.
    pub fn new() -> Self {
        Self::with_schema(Box::new(PantrySchema))
    }

    /// An extractor for a specific markup schema version.
    pub fn with_schema(schema: Box<dyn RecipeSchema>) -> Self {
        Extractor { schema }
    }

    /// Parse raw markup into a recipe.
    ///
    /// Never fails: each field is extracted independently and degrades to
    /// its empty default when the source fragment is absent, with one
    /// notice per missing fragment.
    pub fn parse(&self, markup: &str) -> Extraction {
        let document = Html::parse_document(markup);
        let mut diagnostics = Diagnostics::default();

        let recipe = Recipe {
            title: self.schema.title(&document, &mut diagnostics),
            serving_size: self.schema.serving_size(&document, &mut diagnostics),
            ingredients: self.schema.ingredients(&document, &mut diagnostics),
            instructions: self.schema.instructions(&document, &mut diagnostics),
        };

        Extraction {
            recipe,
            diagnostics,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new()
    }
}
