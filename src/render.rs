//! Renders a [`Recipe`] as a self-contained HTML document or a plaintext
//! summary.
//!
//! The HTML layout is consumed by a notes-import workflow downstream, so
//! the element structure (`h1`, single `p`, `ul`/`li`, `ol`/`li`) is part
//! of the output contract. Field text is inserted verbatim, without HTML
//! escaping; see the known-limitation test at the bottom of this module.

use crate::model::Recipe;

fn list_items(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("        <li>{entry}</li>"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn to_html(recipe: &Recipe) -> String {
    format!(
        r#"<html>
<body>
    <h1>{title}</h1>
    <p>{serving_size}</p>
    <br>
    <h2>Ingredients</h2>
    <ul>
{ingredients}
    </ul>
    <br>
    <h2>Instructions</h2>
    <ol>
{instructions}
    </ol>
</body>
</html>
"#,
        title = recipe.title,
        serving_size = recipe.serving_size,
        ingredients = list_items(&recipe.ingredients),
        instructions = list_items(&recipe.instructions),
    )
}

pub(crate) fn to_plaintext(recipe: &Recipe) -> String {
    let mut lines = vec![recipe.title.clone(), recipe.serving_size.clone()];

    lines.push(String::new());
    lines.push("Ingredients:".to_string());
    for ingredient in &recipe.ingredients {
        lines.push(format!("- {ingredient}"));
    }

    lines.push(String::new());
    lines.push("Instructions:".to_string());
    for (n, instruction) in recipe.instructions.iter().enumerate() {
        lines.push(format!("{}. {}", n + 1, instruction));
    }

    lines.join("\n")
}
