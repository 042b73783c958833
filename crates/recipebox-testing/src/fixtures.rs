//! Sample catalogs in the exported JSON format.

use serde_json::{Value, json};

/// Five recipes covering the edge cases the built-in examples do not:
/// an hour-based prep time, an unparsable prep time, a legacy record
/// without servings or calories, and a numeric prep time.
pub fn sample_catalog() -> Value {
    json!([
        {
            "id": 10,
            "name": "Garlic Noodles",
            "description": "Buttery noodles with plenty of garlic.",
            "image": "",
            "category": "Asian",
            "difficulty": "Easy",
            "prepTime": "15 mins",
            "servings": 2,
            "calories": 540,
            "rating": 3.9,
            "ingredients": ["noodles", "garlic", "butter", "parmesan"]
        },
        {
            "id": 11,
            "name": "Lemon Tart",
            "description": "Sharp lemon curd in a sweet pastry shell.",
            "image": "",
            "category": "Dessert",
            "difficulty": "Hard",
            "prepTime": "1 hr 15 mins",
            "servings": 8,
            "calories": 380,
            "rating": 4.7,
            "ingredients": ["lemons", "eggs", "sugar", "butter", "flour"],
            "nutrition": { "protein": "6g", "carbs": "48g", "fat": "18g" }
        },
        {
            "id": 12,
            "name": "Mystery Stew",
            "description": "Whatever is left in the fridge.",
            "image": "",
            "category": "Comfort",
            "difficulty": "Medium",
            "prepTime": "a while",
            "servings": 4,
            "calories": 450,
            "rating": 3.0,
            "ingredients": ["leftovers", "stock"]
        },
        {
            "id": 13,
            "name": "Tomato Soup",
            "category": "Comfort",
            "difficulty": "Easy",
            "prepTime": 30,
            "rating": 4.1,
            "ingredients": ["tomatoes", "garlic", "cream"]
        },
        {
            "id": 14,
            "name": "Garlic Bread",
            "description": "Crisp bread with garlic butter.",
            "image": "",
            "category": "Sides",
            "difficulty": "Easy",
            "prepTime": "10 mins",
            "servings": 4,
            "calories": 300,
            "rating": 3.9,
            "ingredients": ["baguette", "garlic", "butter"]
        }
    ])
}

/// A catalog that parses but repeats an id.
pub fn duplicate_id_catalog() -> Value {
    json!([
        {
            "id": 1, "name": "One", "category": "A", "difficulty": "Easy",
            "prepTime": "5 mins", "rating": 1.0
        },
        {
            "id": 1, "name": "Also One", "category": "A", "difficulty": "Easy",
            "prepTime": "5 mins", "rating": 2.0
        }
    ])
}
