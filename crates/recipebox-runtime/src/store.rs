use chrono::Utc;
use recipebox_engine::{CatalogStats, compute_stats, derive_view, seed_recipes, validate_catalog};
use recipebox_types::{
    ALL_LABEL, AdvancedFilter, CategoryFilter, Error as CatalogError, FilterSettings, Recipe,
    RecipeDraft, RecipeId, SortKey,
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::capabilities::{Clipboard, ShareOutcome, ShareTarget};
use crate::intent::{IntentOutcome, StoreIntent};
use crate::{Error, Result};

/// Owns the master recipe list, view state and favorites for one session.
///
/// Every mutation recomputes the derived list before returning, so
/// [`CatalogStore::derived`] is always consistent with the current state.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    recipes: Vec<Recipe>,
    filters: FilterSettings,
    sort: SortKey,
    favorites: BTreeSet<RecipeId>,
    // positions into `recipes`
    derived: Vec<usize>,
    version: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// A store over the built-in example catalog.
    pub fn new() -> Self {
        let mut store = Self {
            recipes: seed_recipes(),
            filters: FilterSettings::default(),
            sort: SortKey::Unsorted,
            favorites: BTreeSet::new(),
            derived: Vec::new(),
            version: 0,
        };
        store.recompute();
        store
    }

    /// A store over `recipes`, rejecting duplicate ids and invalid records.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        validate_catalog(&recipes)?;
        let mut store = Self {
            recipes,
            filters: FilterSettings::default(),
            sort: SortKey::Unsorted,
            favorites: BTreeSet::new(),
            derived: Vec::new(),
            version: 0,
        };
        store.recompute();
        Ok(store)
    }

    /// A store over a previously exported catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let recipes = recipebox_engine::from_json(json)?;
        Self::with_recipes(recipes)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), recipes = store.recipes.len(), "loaded catalog");
        Ok(store)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn favorites(&self) -> &BTreeSet<RecipeId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }

    /// Bumped on every state change
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn recipe(&self, id: RecipeId) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("no recipe with id {}", id)).into())
    }

    /// "All" followed by each distinct category in master-list order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_LABEL.to_string()];
        for recipe in &self.recipes {
            if !categories.iter().any(|c| c == &recipe.category) {
                categories.push(recipe.category.clone());
            }
        }
        categories
    }

    // ---- view state -------------------------------------------------

    pub fn set_search_term(&mut self, term: &str) {
        self.filters.set_search(term);
        debug!(search = %self.filters.search, "search term updated");
        self.recompute();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        debug!(%category, "category filter updated");
        self.filters.category = category;
        self.recompute();
    }

    /// Update one advanced filter field. An invalid value leaves state untouched.
    pub fn set_advanced_filter(&mut self, update: AdvancedFilter) -> Result<()> {
        if let Err(err) = self.filters.apply(update) {
            warn!(?update, "rejected filter update: {}", err);
            return Err(err.into());
        }
        debug!(?update, "advanced filter updated");
        self.recompute();
        Ok(())
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        debug!(%key, "sort key updated");
        self.sort = key;
        self.recompute();
    }

    /// Restore search, category and advanced filters to their defaults.
    /// Favorites, the sort key and the master list are kept.
    pub fn reset_filters(&mut self) {
        debug!("filters reset");
        self.filters = FilterSettings::default();
        self.recompute();
    }

    // ---- favorites ---------------------------------------------------

    /// Flip favorite membership of `id`; returns the new membership.
    ///
    /// Unknown ids are reported as not found and change nothing.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> Result<bool> {
        if !self.recipes.iter().any(|r| r.id == id) {
            warn!(%id, "favorite toggle for unknown recipe");
            return Err(CatalogError::NotFound(format!("no recipe with id {}", id)).into());
        }

        let favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.version += 1;
        debug!(%id, favorite, "favorite toggled");
        Ok(favorite)
    }

    // ---- catalog -----------------------------------------------------

    /// Validate `draft`, give it a fresh id and a 0 rating, and append it.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<RecipeId> {
        let id = self.next_id()?;
        let recipe = match draft.into_recipe(id) {
            Ok(recipe) => recipe,
            Err(err) => {
                warn!("rejected new recipe: {}", err);
                return Err(err.into());
            }
        };

        info!(%id, name = %recipe.name, "recipe added");
        self.recipes.push(recipe);
        self.recompute();
        Ok(id)
    }

    /// Ids are derived from the wall clock, bumped past any existing id.
    /// Once `u64::MAX` is taken, the lowest unused id is handed out instead.
    fn next_id(&self) -> Result<RecipeId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let Some(max) = self.recipes.iter().map(|r| r.id.as_u64()).max() else {
            return Ok(RecipeId::new(now));
        };

        if let Some(after_last) = max.checked_add(1) {
            return Ok(RecipeId::new(now.max(after_last)));
        }

        let taken: BTreeSet<u64> = self.recipes.iter().map(|r| r.id.as_u64()).collect();
        (0..=u64::MAX)
            .find(|candidate| !taken.contains(candidate))
            .map(RecipeId::new)
            .ok_or_else(|| CatalogError::Validation("no recipe ids left".to_string()).into())
    }

    // ---- derived view ------------------------------------------------

    /// The filtered, sorted list consumers should render.
    pub fn derived(&self) -> Vec<&Recipe> {
        self.derived.iter().map(|&i| &self.recipes[i]).collect()
    }

    /// Recompute the derived list from scratch without touching the cache.
    pub fn compute_derived_list(&self) -> Vec<&Recipe> {
        derive_view(&self.recipes, &self.filters, self.sort)
            .into_iter()
            .map(|i| &self.recipes[i])
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        compute_stats(&self.derived(), &self.favorites)
    }

    fn recompute(&mut self) {
        self.derived = derive_view(&self.recipes, &self.filters, self.sort);
        self.version += 1;
    }

    // ---- intents -----------------------------------------------------

    pub fn apply(&mut self, intent: StoreIntent) -> Result<IntentOutcome> {
        match intent {
            StoreIntent::Search(term) => self.set_search_term(&term),
            StoreIntent::Category(category) => self.set_category_filter(category),
            StoreIntent::Filter(update) => self.set_advanced_filter(update)?,
            StoreIntent::Sort(key) => self.set_sort_key(key),
            StoreIntent::ResetFilters => self.reset_filters(),
            StoreIntent::ToggleFavorite(id) => {
                let favorite = self.toggle_favorite(id)?;
                return Ok(IntentOutcome::Favorite { id, favorite });
            }
            StoreIntent::AddRecipe(draft) => {
                return self.add_recipe(draft).map(IntentOutcome::Added);
            }
        }
        Ok(IntentOutcome::ViewUpdated)
    }

    // ---- export & share ---------------------------------------------

    /// The whole master list as indented JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(recipebox_engine::to_json(&self.recipes)?)
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        info!(path = %path.display(), recipes = self.recipes.len(), "catalog exported");
        Ok(())
    }

    /// Hand the share text to `target`, or to `clipboard` when the target is unavailable.
    pub fn share(
        &self,
        id: RecipeId,
        target: &mut dyn ShareTarget,
        clipboard: &mut dyn Clipboard,
    ) -> Result<ShareOutcome> {
        let recipe = self.recipe(id)?;
        let text = recipebox_engine::share_text(recipe);

        if target.is_available() {
            target.share(&recipe.name, &text)?;
            debug!(%id, "recipe shared");
            return Ok(ShareOutcome::Shared);
        }

        clipboard.write_text(&text).map_err(|err| {
            Error::Capability(format!("could not share or copy recipe {}: {}", id, err))
        })?;
        debug!(%id, "share unavailable, copied to clipboard");
        Ok(ShareOutcome::CopiedToClipboard)
    }

    pub fn copy_ingredients(&self, id: RecipeId, clipboard: &mut dyn Clipboard) -> Result<()> {
        let recipe = self.recipe(id)?;
        clipboard.write_text(&recipebox_engine::ingredients_text(recipe))?;
        debug!(%id, "ingredients copied");
        Ok(())
    }
}
