use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::extractors::{Diagnostic, Diagnostics, RecipeSchema};

// NYT Cooking serves CSS-module class names: a stable prefix followed by a
// build-hash suffix (e.g. "ingredient_ingredient__rfjvs"). Matching must be
// by prefix pattern, never equality, or every site build breaks extraction.
const INGREDIENT_LIST_CLASS: &str = "ingredientList_ingredientList__";
const INGREDIENT_QUANTITY_CLASS: &str = "ingredient_quantity__";
const INGREDIENT_NAME_CLASS: &str = "ingredient_name__";
const PREPARATION_LIST_CLASS: &str = "preparation_steps__";
// Design-system classes are stable and matched exactly
const STEP_BODY_SELECTOR: &str = "p.pantry--body-long";

const YIELD_LABEL: &str = "Yield:";
const TITLE_RECIPE_SUFFIX: &str = " Recipe";
const TITLE_SITE_SUFFIX: &str = " - NYT Cooking";

/// The NYT Cooking markup variant built on the "pantry" design system,
/// current as of the 2024 site builds.
pub struct PantrySchema;

fn class_pattern(prefix: &str) -> Selector {
    // Substring match tolerates both the volatile suffix and neighboring
    // classes in the same attribute
    Selector::parse(&format!("[class*='{prefix}']")).unwrap()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Direct `<li>` children of a list container, in document order. Nested
/// lists inside a step must not leak extra items, so this does not recurse.
fn list_items<'a>(container: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "li")
}

impl RecipeSchema for PantrySchema {
    fn title(&self, document: &Html, diagnostics: &mut Diagnostics) -> String {
        let selector = Selector::parse("title").unwrap();
        let raw = match document.select(&selector).next() {
            Some(element) => element_text(&element),
            None => String::new(),
        };
        if raw.is_empty() {
            diagnostics.push(Diagnostic::MissingTitle);
            return String::new();
        }

        // Strip the " Recipe" and " - NYT Cooking" suffixes. Exact-substring
        // removal is lossy for titles that legitimately contain either
        // string; the site's own titles never do.
        let title = raw
            .replace(TITLE_RECIPE_SUFFIX, "")
            .replace(TITLE_SITE_SUFFIX, "")
            .trim()
            .to_string();

        debug!("title: {title}");
        title
    }

    fn serving_size(&self, document: &Html, diagnostics: &mut Diagnostics) -> String {
        let selector = Selector::parse("span").unwrap();
        let label = document
            .select(&selector)
            .find(|span| element_text(span) == YIELD_LABEL);
        let Some(label) = label else {
            diagnostics.push(Diagnostic::MissingServingSize);
            return String::new();
        };

        // The yield value lives in the label's sibling element
        let Some(value) = label.next_siblings().filter_map(ElementRef::wrap).next() else {
            diagnostics.push(Diagnostic::MissingServingSize);
            return String::new();
        };

        let serving = element_text(&value);
        debug!("serving size: {serving}");
        serving
    }

    fn ingredients(&self, document: &Html, diagnostics: &mut Diagnostics) -> Vec<String> {
        let Some(container) = document.select(&class_pattern(INGREDIENT_LIST_CLASS)).next()
        else {
            diagnostics.push(Diagnostic::MissingIngredients);
            return Vec::new();
        };

        let quantity_selector = class_pattern(INGREDIENT_QUANTITY_CLASS);
        let name_selector = class_pattern(INGREDIENT_NAME_CLASS);

        let mut ingredients = Vec::new();
        for item in list_items(&container) {
            // Items without both parts are decorative (section headers,
            // empty rows) and are skipped without a notice
            let quantity = item.select(&quantity_selector).next();
            let name = item.select(&name_selector).next();
            let (Some(quantity), Some(name)) = (quantity, name) else {
                continue;
            };

            let quantity = element_text(&quantity);
            let name = element_text(&name);
            let ingredient = if quantity.is_empty() {
                name
            } else {
                format!("{quantity} {name}")
            };

            debug!("ingredient: {ingredient}");
            ingredients.push(ingredient);
        }

        ingredients
    }

    fn instructions(&self, document: &Html, diagnostics: &mut Diagnostics) -> Vec<String> {
        let Some(container) = document.select(&class_pattern(PREPARATION_LIST_CLASS)).next()
        else {
            diagnostics.push(Diagnostic::MissingInstructions);
            return Vec::new();
        };

        let body_selector = Selector::parse(STEP_BODY_SELECTOR).unwrap();

        let mut instructions = Vec::new();
        for step in list_items(&container) {
            let Some(body) = step.select(&body_selector).next() else {
                diagnostics.push(Diagnostic::StepMissingText);
                continue;
            };

            let instruction = element_text(&body);
            debug!("instruction: {instruction}");
            instructions.push(instruction);
        }

        instructions
    }
}
