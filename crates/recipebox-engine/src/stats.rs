use recipebox_types::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Summary shown above the recipe grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub count: usize,
    /// Rounded to one decimal place
    pub average_rating: f64,
    /// Rounded to whole minutes
    pub average_prep_time: u32,
    pub favorite_count: usize,
}

/// Summarize the derived list.
///
/// Averages over an empty list are 0. The prep-time average only counts
/// recipes whose prep time parses; `favorite_count` is the size of the
/// whole favorites set.
pub fn compute_stats(derived: &[&Recipe], favorites: &BTreeSet<RecipeId>) -> CatalogStats {
    let count = derived.len();

    let average_rating = if count == 0 {
        0.0
    } else {
        let total: f64 = derived.iter().map(|r| r.rating).sum();
        round_to_tenth(total / count as f64)
    };

    let minutes: Vec<u32> = derived.iter().filter_map(|r| r.prep_minutes()).collect();
    let average_prep_time = if minutes.is_empty() {
        0
    } else {
        let total: u64 = minutes.iter().map(|&m| u64::from(m)).sum();
        (total as f64 / minutes.len() as f64).round() as u32
    };

    CatalogStats {
        count,
        average_rating,
        average_prep_time,
        favorite_count: favorites.len(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
