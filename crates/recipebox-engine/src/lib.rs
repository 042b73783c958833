// Engine module - pure derived-view logic over the catalog
// This layer sits between the data model (types) and the catalog store (runtime)

pub mod export;
pub mod filter;
pub mod seed;
pub mod share;
pub mod sort;
pub mod stats;

pub use export::{EXPORT_FILE_NAME, from_json, to_json, validate_catalog};
pub use filter::matches;
pub use seed::seed_recipes;
pub use share::{ingredients_text, share_text};
pub use stats::{CatalogStats, compute_stats};

use recipebox_types::{FilterSettings, Recipe, SortKey};

// Façade API - the store calls this after every mutation

/// Positions (into `recipes`) of the derived list: filtered, then stably sorted.
///
/// Pure: the same inputs always give the same positions in the same order.
pub fn derive_view(recipes: &[Recipe], settings: &FilterSettings, sort: SortKey) -> Vec<usize> {
    let mut positions = filter::filter_positions(recipes, settings);
    sort::sort_positions(recipes, &mut positions, sort);
    positions
}
