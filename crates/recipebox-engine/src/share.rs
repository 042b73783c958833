use recipebox_types::Recipe;

/// Human-readable text handed to a share target (or the clipboard fallback).
pub fn share_text(recipe: &Recipe) -> String {
    format!(
        "{}\nPrep time: {}\nDifficulty: {}\nRating: {:.1}/5",
        recipe.name, recipe.prep_time, recipe.difficulty, recipe.rating
    )
}

/// Ingredient list in display order, one bullet per line.
pub fn ingredients_text(recipe: &Recipe) -> String {
    let mut text = format!("Ingredients for {}:", recipe.name);
    for ingredient in &recipe.ingredients {
        text.push_str("\n- ");
        text.push_str(ingredient);
    }
    text
}
