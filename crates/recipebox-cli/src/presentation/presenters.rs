//! Store state to view models. No formatting beyond labels happens here.

use recipebox_runtime::CatalogStore;
use recipebox_types::{CategoryFilter, Recipe, RecipeId};
use std::path::Path;

use super::cards::CardStates;
use super::view_models::{
    AckViewModel, AddedRecipeViewModel, CardDetailsViewModel, CategoriesViewModel,
    CommandResultViewModel, Delivery, ExportViewModel, Guidance, GuidanceViewModel,
    PayloadKind, PayloadViewModel, RecipeCardViewModel, RecipeListViewModel, StatsViewModel,
};

pub fn present_card(recipe: &Recipe, is_favorite: bool, expanded: bool) -> RecipeCardViewModel {
    let details = expanded.then(|| CardDetailsViewModel {
        ingredients: recipe.ingredients.clone(),
        nutrition: recipe.nutrition.clone(),
    });

    RecipeCardViewModel {
        id: recipe.id,
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        image: recipe.image.clone(),
        category: recipe.category.clone(),
        difficulty: recipe.difficulty.label().to_string(),
        prep_time: recipe.prep_time.to_string(),
        rating: recipe.rating,
        servings: recipe.servings,
        calories: recipe.calories,
        is_favorite,
        details,
    }
}

pub fn present_list(
    store: &CatalogStore,
    cards: &CardStates,
) -> CommandResultViewModel<RecipeListViewModel> {
    let recipes: Vec<RecipeCardViewModel> = store
        .derived()
        .into_iter()
        .map(|r| present_card(r, store.is_favorite(r.id), cards.is_expanded(r.id)))
        .collect();

    let empty = recipes.is_empty();
    let content = RecipeListViewModel {
        filters: store.filters().clone(),
        sort: store.sort_key(),
        stats: store.stats(),
        recipes,
    };

    let mut result = CommandResultViewModel::new(content);
    if empty && !store.recipes().is_empty() {
        result = result.with_suggestion(
            Guidance::new("Clear the search and filters to see every recipe")
                .with_command("reset"),
        );
    }
    result
}

pub fn present_stats(store: &CatalogStore) -> CommandResultViewModel<StatsViewModel> {
    CommandResultViewModel::new(StatsViewModel {
        filters: store.filters().clone(),
        stats: store.stats(),
    })
}

pub fn present_categories(store: &CatalogStore) -> CommandResultViewModel<CategoriesViewModel> {
    let selected = match &store.filters().category {
        CategoryFilter::All => CategoryFilter::All.to_string(),
        CategoryFilter::Only(label) => label.clone(),
    };

    CommandResultViewModel::new(CategoriesViewModel {
        categories: store.categories(),
        selected,
    })
}

pub fn present_recipe(
    store: &CatalogStore,
    id: RecipeId,
) -> recipebox_runtime::Result<CommandResultViewModel<RecipeCardViewModel>> {
    let recipe = store.recipe(id)?;
    let card = present_card(recipe, store.is_favorite(id), true);

    Ok(CommandResultViewModel::new(card).with_suggestion(
        Guidance::new("Share this recipe").with_command(format!("recipebox share {}", id)),
    ))
}

/// `export_tip` is shown only when the catalog was not exported alongside the add.
pub fn present_added(
    store: &CatalogStore,
    id: RecipeId,
    exported_to: Option<&Path>,
    export_tip: Guidance,
) -> recipebox_runtime::Result<CommandResultViewModel<AddedRecipeViewModel>> {
    let recipe = store.recipe(id)?;
    let content = AddedRecipeViewModel {
        recipe: present_card(recipe, store.is_favorite(id), true),
        exported_to: exported_to.map(|p| p.display().to_string()),
    };

    let mut result = CommandResultViewModel::new(content);
    if exported_to.is_none() {
        result = result.with_suggestion(export_tip);
    }
    Ok(result)
}

pub fn present_export(path: &Path, recipe_count: usize) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        path: path.display().to_string(),
        recipe_count,
    })
    .with_suggestion(
        Guidance::new("Browse the exported catalog")
            .with_command(format!("recipebox --catalog {} list", path.display())),
    )
}

pub fn present_payload(
    recipe_id: RecipeId,
    kind: PayloadKind,
    delivered: Delivery,
    text: String,
) -> CommandResultViewModel<PayloadViewModel> {
    CommandResultViewModel::new(PayloadViewModel {
        recipe_id,
        kind,
        delivered,
        text,
    })
}

pub fn present_ack(
    message: impl Into<String>,
    store: &CatalogStore,
) -> CommandResultViewModel<AckViewModel> {
    CommandResultViewModel::new(AckViewModel {
        message: message.into(),
        shown: store.derived().len(),
    })
}

pub fn present_guidance(
    config_path: &Path,
    store: &CatalogStore,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_path: config_path.display().to_string(),
        recipe_count: store.recipes().len(),
    })
}
