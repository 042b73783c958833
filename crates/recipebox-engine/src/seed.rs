//! The example catalog every session starts from.

use recipebox_types::{Difficulty, Nutrition, PrepTime, Recipe, RecipeId};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";

pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: RecipeId::new(1),
            name: "Spaghetti Bolognese".to_string(),
            description: "A classic Italian pasta dish with rich meat sauce.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: "Italian".to_string(),
            difficulty: Difficulty::Medium,
            prep_time: PrepTime::Text("45 mins".to_string()),
            servings: 4,
            calories: 650,
            rating: 4.5,
            ingredients: strings(&["pasta", "ground beef", "tomato sauce", "onions", "garlic"]),
            nutrition: Some(nutrition(&[("protein", "32g"), ("carbs", "75g"), ("fat", "22g")])),
        },
        Recipe {
            id: RecipeId::new(2),
            name: "Chicken Curry".to_string(),
            description: "A flavorful curry with tender chicken pieces.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: "Indian".to_string(),
            difficulty: Difficulty::Hard,
            prep_time: PrepTime::Text("60 mins".to_string()),
            servings: 4,
            calories: 720,
            rating: 4.8,
            ingredients: strings(&["chicken", "curry powder", "coconut milk", "onions", "spices"]),
            nutrition: Some(nutrition(&[("protein", "38g"), ("carbs", "20g"), ("fat", "45g")])),
        },
        Recipe {
            id: RecipeId::new(3),
            name: "Vegetable Stir-Fry".to_string(),
            description: "A quick and healthy stir-fry with fresh vegetables.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: "Asian".to_string(),
            difficulty: Difficulty::Easy,
            prep_time: PrepTime::Text("20 mins".to_string()),
            servings: 2,
            calories: 320,
            rating: 4.2,
            ingredients: strings(&["mixed vegetables", "soy sauce", "garlic", "ginger", "oil"]),
            nutrition: Some(nutrition(&[("protein", "9g"), ("carbs", "35g"), ("fat", "14g")])),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn nutrition(pairs: &[(&str, &str)]) -> Nutrition {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
