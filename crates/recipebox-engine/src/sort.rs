use recipebox_types::{Recipe, SortKey};
use std::cmp::Ordering;

/// Reorder `positions` by `key`.
///
/// Uses a stable sort, so recipes with equal keys keep their relative
/// master-list order. Unparsable prep times sort after every parsable one.
pub fn sort_positions(recipes: &[Recipe], positions: &mut [usize], key: SortKey) {
    if key == SortKey::Unsorted {
        return;
    }
    positions.sort_by(|&a, &b| compare(&recipes[a], &recipes[b], key));
}

/// Comparison used for a single sort key.
pub fn compare(a: &Recipe, b: &Recipe, key: SortKey) -> Ordering {
    match key {
        SortKey::Unsorted => Ordering::Equal,
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortKey::PrepTime => {
            let (am, bm) = (a.prep_minutes(), b.prep_minutes());
            (am.is_none(), am).cmp(&(bm.is_none(), bm))
        }
        SortKey::Calories => a.calories.cmp(&b.calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_recipes;
    use recipebox_types::{Difficulty, PrepTime};

    fn sorted_names(recipes: &[Recipe], key: SortKey) -> Vec<String> {
        let mut positions: Vec<usize> = (0..recipes.len()).collect();
        sort_positions(recipes, &mut positions, key);
        positions.iter().map(|&i| recipes[i].name.clone()).collect()
    }

    #[test]
    fn test_difficulty_sort_is_easiest_first() {
        let recipes = seed_recipes();
        assert_eq!(
            sorted_names(&recipes, SortKey::Difficulty),
            vec!["Vegetable Stir-Fry", "Spaghetti Bolognese", "Chicken Curry"]
        );
    }

    #[test]
    fn test_rating_sort_is_highest_first() {
        let recipes = seed_recipes();
        assert_eq!(
            sorted_names(&recipes, SortKey::Rating),
            vec!["Chicken Curry", "Spaghetti Bolognese", "Vegetable Stir-Fry"]
        );
    }

    #[test]
    fn test_prep_time_and_calories_ascending() {
        let recipes = seed_recipes();
        assert_eq!(
            sorted_names(&recipes, SortKey::PrepTime),
            vec!["Vegetable Stir-Fry", "Spaghetti Bolognese", "Chicken Curry"]
        );
        assert_eq!(
            sorted_names(&recipes, SortKey::Calories),
            vec!["Vegetable Stir-Fry", "Spaghetti Bolognese", "Chicken Curry"]
        );
    }

    #[test]
    fn test_unsorted_keeps_master_order() {
        let recipes = seed_recipes();
        assert_eq!(
            sorted_names(&recipes, SortKey::Unsorted),
            vec!["Spaghetti Bolognese", "Chicken Curry", "Vegetable Stir-Fry"]
        );
    }

    #[test]
    fn test_ties_keep_master_order() {
        let mut recipes = seed_recipes();
        for r in recipes.iter_mut() {
            r.difficulty = Difficulty::Medium;
            r.rating = 4.0;
        }
        let master = sorted_names(&recipes, SortKey::Unsorted);

        assert_eq!(sorted_names(&recipes, SortKey::Difficulty), master);
        assert_eq!(sorted_names(&recipes, SortKey::Rating), master);
    }

    #[test]
    fn test_unparsable_prep_time_sorts_last() {
        let mut recipes = seed_recipes();
        recipes[2].prep_time = PrepTime::Text("overnight".to_string());

        assert_eq!(
            sorted_names(&recipes, SortKey::PrepTime),
            vec!["Spaghetti Bolognese", "Chicken Curry", "Vegetable Stir-Fry"]
        );
    }
}
