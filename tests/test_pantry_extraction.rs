use nyt_recipe::{Diagnostic, Extractor, Recipe};

// A trimmed-down NYT Cooking page with the hashed class names the live
// site generates
const SAMPLE_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <title>Spaghetti Carbonara Recipe - NYT Cooking</title>
</head>
<body>
    <header class="siteHeader_container__4x8Qk">NYT Cooking</header>
    <h1 class="pantry--title-display">Spaghetti Carbonara</h1>
    <div class="stats_cookingStats__2P0Cg">
        <span class="pantry--ui stats_statLabel__8cPSH">Total Time:</span>
        <span class="pantry--ui">30 minutes</span>
        <span class="pantry--ui stats_statLabel__8cPSH">Yield:</span>
        <span class="pantry--ui">4 servings</span>
    </div>
    <ul class="ingredientList_ingredientList__2H9lY">
        <li class="ingredient_ingredient__rfjvs pantry--ui">
            <span class="ingredient_quantity__Z_Kyt">450 grams</span>
            <span class="ingredient_name__x7Vby">spaghetti</span>
        </li>
        <li class="ingredient_ingredient__rfjvs pantry--ui">
            <span class="ingredient_quantity__Z_Kyt">4</span>
            <span class="ingredient_name__x7Vby">large eggs</span>
        </li>
        <li class="ingredient_ingredient__rfjvs pantry--ui">
            <span class="ingredient_quantity__Z_Kyt"></span>
            <span class="ingredient_name__x7Vby">Black pepper, to taste</span>
        </li>
    </ul>
    <ol class="preparation_steps__jGYyQ">
        <li class="preparation_step__nzRwn">
            <h3 class="pantry--label">Step 1</h3>
            <p class="pantry--body-long">Bring a large pot of salted water to a boil.</p>
        </li>
        <li class="preparation_step__nzRwn">
            <h3 class="pantry--label">Step 2</h3>
            <p class="pantry--body-long">Cook the spaghetti until al dente.</p>
        </li>
        <li class="preparation_step__nzRwn">
            <h3 class="pantry--label">Step 3</h3>
            <p class="pantry--body-long">Toss with the egg mixture off the heat.</p>
        </li>
    </ol>
</body>
</html>
"#;

#[test]
fn extracts_a_complete_recipe() {
    let extraction = Extractor::new().parse(SAMPLE_PAGE);

    assert!(extraction.diagnostics().is_empty());
    assert_eq!(
        extraction.recipe(),
        &Recipe {
            title: "Spaghetti Carbonara".to_string(),
            serving_size: "4 servings".to_string(),
            ingredients: vec![
                "450 grams spaghetti".to_string(),
                "4 large eggs".to_string(),
                "Black pepper, to taste".to_string(),
            ],
            instructions: vec![
                "Bring a large pot of salted water to a boil.".to_string(),
                "Cook the spaghetti until al dente.".to_string(),
                "Toss with the egg mixture off the heat.".to_string(),
            ],
        }
    );
}

#[test]
fn ingredient_count_and_order_follow_the_document() {
    let recipe = Recipe::from_markup(SAMPLE_PAGE);

    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[0], "450 grams spaghetti");
    assert_eq!(recipe.ingredients[2], "Black pepper, to taste");
}

#[test]
fn missing_title_yields_empty_string_and_a_notice() {
    let page = SAMPLE_PAGE.replace(
        "<title>Spaghetti Carbonara Recipe - NYT Cooking</title>",
        "",
    );

    let extraction = Extractor::new().parse(&page);

    assert_eq!(extraction.recipe().title, "");
    assert_eq!(extraction.diagnostics().notices(), &[Diagnostic::MissingTitle]);
}

#[test]
fn missing_ingredient_container_is_reported_once() {
    let page = r#"
        <html>
        <head><title>Toast Recipe - NYT Cooking</title></head>
        <body>
            <span>Yield:</span><span>1 slice</span>
            <ol class="preparation_steps__jGYyQ">
                <li class="preparation_step__nzRwn">
                    <p class="pantry--body-long">Toast the bread.</p>
                </li>
            </ol>
        </body>
        </html>
    "#;

    let extraction = Extractor::new().parse(page);

    assert!(extraction.recipe().ingredients.is_empty());
    assert_eq!(
        extraction.diagnostics().notices(),
        &[Diagnostic::MissingIngredients]
    );
}

#[test]
fn empty_page_degrades_every_field() {
    let extraction = Extractor::new().parse("<html><body></body></html>");

    let recipe = extraction.recipe();
    assert_eq!(recipe, &Recipe::default());
    assert_eq!(
        extraction.diagnostics().notices(),
        &[
            Diagnostic::MissingTitle,
            Diagnostic::MissingServingSize,
            Diagnostic::MissingIngredients,
            Diagnostic::MissingInstructions,
        ]
    );
}

#[test]
fn partial_recipe_keeps_the_remaining_fields() {
    // A page without the yield stats is still a legitimate recipe
    let page = SAMPLE_PAGE.replace("Yield:", "Serves:");

    let extraction = Extractor::new().parse(&page);

    let recipe = extraction.recipe();
    assert_eq!(recipe.serving_size, "");
    assert_eq!(recipe.title, "Spaghetti Carbonara");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.instructions.len(), 3);
    assert_eq!(
        extraction.diagnostics().notices(),
        &[Diagnostic::MissingServingSize]
    );
}
