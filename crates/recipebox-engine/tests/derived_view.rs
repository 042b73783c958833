use recipebox_engine::{compute_stats, derive_view, seed_recipes};
use recipebox_types::*;
use std::collections::BTreeSet;

fn names(recipes: &[Recipe], positions: &[usize]) -> Vec<String> {
    positions.iter().map(|&i| recipes[i].name.clone()).collect()
}

// A slightly larger catalog with ties on every sort key
fn tied_catalog() -> Vec<Recipe> {
    let mut recipes = seed_recipes();
    let mut extra = recipes[2].clone();
    extra.id = RecipeId::new(4);
    extra.name = "Garlic Noodles".to_string();
    extra.rating = 4.5;
    recipes.push(extra);

    let mut extra = recipes[0].clone();
    extra.id = RecipeId::new(5);
    extra.name = "Lasagna".to_string();
    extra.prep_time = PrepTime::Text("1 hr 30 mins".to_string());
    recipes.push(extra);
    recipes
}

fn settings_grid() -> Vec<FilterSettings> {
    let mut grid = Vec::new();
    for search in ["", "garlic", "chicken", "zzz"] {
        for category in ["All", "Italian", "Asian"] {
            for difficulty in ["All", "Easy", "Medium", "Hard"] {
                for min_rating in [0.0, 4.5, 5.0] {
                    for max_prep in [0, 45, 120] {
                        let mut s = FilterSettings::default();
                        s.set_search(search);
                        s.category = category.parse().unwrap();
                        s.difficulty = difficulty.parse().unwrap();
                        s.apply(AdvancedFilter::MinRating(min_rating)).unwrap();
                        s.apply(AdvancedFilter::MaxPrepTime(max_prep)).unwrap();
                        grid.push(s);
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_derived_list_is_subset_of_catalog() {
    let recipes = tied_catalog();
    let sorts = [
        SortKey::Unsorted,
        SortKey::Rating,
        SortKey::Difficulty,
        SortKey::PrepTime,
        SortKey::Calories,
    ];

    for settings in settings_grid() {
        for sort in sorts {
            let positions = derive_view(&recipes, &settings, sort);
            let unique: BTreeSet<usize> = positions.iter().copied().collect();
            assert_eq!(unique.len(), positions.len(), "no record appears twice");
            assert!(positions.iter().all(|&i| i < recipes.len()));
            for &i in &positions {
                assert!(recipebox_engine::matches(&recipes[i], &settings));
            }
        }
    }
}

#[test]
fn test_derive_view_is_idempotent() {
    let recipes = tied_catalog();
    for settings in settings_grid() {
        let first = derive_view(&recipes, &settings, SortKey::Rating);
        let second = derive_view(&recipes, &settings, SortKey::Rating);
        assert_eq!(first, second);
    }
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let recipes = tied_catalog();
    let settings = FilterSettings::default();

    // Bolognese (pos 0) and Garlic Noodles (pos 3) share rating 4.5
    let by_rating = derive_view(&recipes, &settings, SortKey::Rating);
    assert_eq!(
        names(&recipes, &by_rating),
        vec![
            "Chicken Curry",
            "Spaghetti Bolognese",
            "Garlic Noodles",
            "Lasagna",
            "Vegetable Stir-Fry"
        ]
    );

    // Stir-Fry and Garlic Noodles are both Easy; Bolognese and Lasagna both Medium
    let by_difficulty = derive_view(&recipes, &settings, SortKey::Difficulty);
    assert_eq!(
        names(&recipes, &by_difficulty),
        vec![
            "Vegetable Stir-Fry",
            "Garlic Noodles",
            "Spaghetti Bolognese",
            "Lasagna",
            "Chicken Curry"
        ]
    );
}

#[test]
fn test_seed_scenarios() {
    let recipes = seed_recipes();

    let mut italian = FilterSettings::default();
    italian.category = CategoryFilter::Only("Italian".to_string());
    assert_eq!(
        names(&recipes, &derive_view(&recipes, &italian, SortKey::Unsorted)),
        vec!["Spaghetti Bolognese"]
    );

    let mut top_rated = FilterSettings::default();
    top_rated.apply(AdvancedFilter::MinRating(4.6)).unwrap();
    assert_eq!(
        names(&recipes, &derive_view(&recipes, &top_rated, SortKey::Unsorted)),
        vec!["Chicken Curry"]
    );

    assert_eq!(
        names(
            &recipes,
            &derive_view(&recipes, &FilterSettings::default(), SortKey::Difficulty)
        ),
        vec!["Vegetable Stir-Fry", "Spaghetti Bolognese", "Chicken Curry"]
    );

    let mut garlic = FilterSettings::default();
    garlic.set_search("garlic");
    assert_eq!(
        names(&recipes, &derive_view(&recipes, &garlic, SortKey::Unsorted)),
        vec!["Spaghetti Bolognese", "Vegetable Stir-Fry"]
    );
}

#[test]
fn test_lasagna_over_default_prep_limit_is_hidden() {
    let recipes = tied_catalog();
    let positions = derive_view(&recipes, &FilterSettings::default(), SortKey::Unsorted);
    // 1 hr 30 mins = 90 minutes, inside the 120 minute default
    assert!(names(&recipes, &positions).contains(&"Lasagna".to_string()));

    let mut quick = FilterSettings::default();
    quick.apply(AdvancedFilter::MaxPrepTime(60)).unwrap();
    let positions = derive_view(&recipes, &quick, SortKey::Unsorted);
    assert!(!names(&recipes, &positions).contains(&"Lasagna".to_string()));
}

#[test]
fn test_stats_snapshot() {
    let recipes = seed_recipes();
    let derived: Vec<&Recipe> = recipes.iter().collect();
    let favorites: BTreeSet<RecipeId> = BTreeSet::new();

    insta::assert_json_snapshot!(compute_stats(&derived, &favorites), @r#"
    {
      "count": 3,
      "averageRating": 4.5,
      "averagePrepTime": 42,
      "favoriteCount": 0
    }
    "#);
}
