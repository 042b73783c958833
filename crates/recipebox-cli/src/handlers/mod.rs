pub mod add;
pub mod categories;
pub mod export;
pub mod list;
pub mod share;
pub mod shell;
pub mod show;
pub mod stats;

use crate::args::FilterArgs;
use recipebox_runtime::{CatalogStore, StoreIntent};
use recipebox_types::AdvancedFilter;
use std::collections::BTreeSet;

/// Translate command-line view flags into store intents, in the order a
/// user would click through the filter bar.
pub(crate) fn intents_from_args(args: &FilterArgs) -> Vec<StoreIntent> {
    let mut intents = Vec::new();

    if let Some(term) = &args.search {
        intents.push(StoreIntent::Search(term.clone()));
    }
    if let Some(category) = &args.category {
        intents.push(StoreIntent::Category(category.clone()));
    }
    if let Some(difficulty) = args.difficulty {
        intents.push(StoreIntent::Filter(AdvancedFilter::Difficulty(difficulty)));
    }
    if let Some(rating) = args.min_rating {
        intents.push(StoreIntent::Filter(AdvancedFilter::MinRating(rating)));
    }
    if let Some(minutes) = args.max_prep_time {
        intents.push(StoreIntent::Filter(AdvancedFilter::MaxPrepTime(minutes)));
    }
    if let Some(calories) = args.max_calories {
        intents.push(StoreIntent::Filter(AdvancedFilter::MaxCalories(calories)));
    }
    if let Some(key) = args.sort {
        intents.push(StoreIntent::Sort(key));
    }

    // A repeated --favorite marks once rather than toggling back off
    let favorites: BTreeSet<_> = args.favorites.iter().copied().collect();
    intents.extend(favorites.into_iter().map(StoreIntent::ToggleFavorite));

    intents
}

pub(crate) fn apply_filter_args(store: &mut CatalogStore, args: &FilterArgs) -> anyhow::Result<()> {
    for intent in intents_from_args(args) {
        store.apply(intent)?;
    }
    Ok(())
}
