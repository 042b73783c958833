use recipebox_types::{AdvancedFilter, CategoryFilter, RecipeDraft, RecipeId, SortKey};

/// A user intent forwarded from the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    Search(String),
    Category(CategoryFilter),
    Filter(AdvancedFilter),
    Sort(SortKey),
    ToggleFavorite(RecipeId),
    AddRecipe(RecipeDraft),
    ResetFilters,
}

/// What an applied intent changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// View state changed; the derived list has been recomputed
    ViewUpdated,
    Favorite { id: RecipeId, favorite: bool },
    Added(RecipeId),
}
