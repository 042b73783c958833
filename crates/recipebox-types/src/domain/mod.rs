mod draft;
mod filter;
mod recipe;

pub use draft::{DEFAULT_CATEGORY, RecipeDraft};
pub use filter::{
    ALL_LABEL, AdvancedFilter, CategoryFilter, DEFAULT_MAX_CALORIES, DEFAULT_MAX_PREP_TIME,
    DEFAULT_MIN_RATING, DifficultyFilter, FilterSettings, SortKey,
};
pub use recipe::{Difficulty, MAX_RATING, Nutrition, PrepTime, Recipe, RecipeId};
