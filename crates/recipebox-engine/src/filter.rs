use recipebox_types::{FilterSettings, Recipe};

/// Whether a recipe passes every predicate in `settings`.
///
/// Predicates are ANDed: search term, category, difficulty, minimum rating,
/// maximum prep time, maximum calories. A prep time that cannot be parsed
/// never satisfies the prep-time bound.
pub fn matches(recipe: &Recipe, settings: &FilterSettings) -> bool {
    matches_search(recipe, &settings.search)
        && settings.category.matches(&recipe.category)
        && settings.difficulty.matches(recipe.difficulty)
        && recipe.rating >= settings.min_rating
        && recipe
            .prep_minutes()
            .is_some_and(|m| m <= settings.max_prep_time)
        && recipe.calories <= settings.max_calories
}

/// Case-insensitive substring match over name, description and ingredients.
pub fn matches_search(recipe: &Recipe, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    recipe.name.to_lowercase().contains(&term)
        || recipe.description.to_lowercase().contains(&term)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&term))
}

/// Positions of matching recipes, in master-list order.
pub fn filter_positions(recipes: &[Recipe], settings: &FilterSettings) -> Vec<usize> {
    recipes
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, settings))
        .map(|(i, _)| i)
        .collect()
}
