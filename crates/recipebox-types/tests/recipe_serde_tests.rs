use recipebox_types::*;
use serde_json::json;

#[test]
fn test_recipe_reads_legacy_prep_time_text() -> anyhow::Result<()> {
    let value = json!({
        "id": 1,
        "name": "Spaghetti Bolognese",
        "description": "A classic Italian pasta dish with rich meat sauce.",
        "image": "https://via.placeholder.com/200",
        "category": "Italian",
        "rating": 4.5,
        "difficulty": "Medium",
        "prepTime": "45 mins",
        "ingredients": ["pasta", "ground beef", "tomato sauce", "onions", "garlic"]
    });

    let recipe: Recipe = serde_json::from_value(value)?;

    assert_eq!(recipe.id, RecipeId::new(1));
    assert_eq!(recipe.difficulty, Difficulty::Medium);
    assert_eq!(recipe.prep_time, PrepTime::Text("45 mins".to_string()));
    assert_eq!(recipe.prep_minutes(), Some(45));
    // Older catalogs had no servings or calories
    assert_eq!(recipe.servings, 1);
    assert_eq!(recipe.calories, 0);
    assert!(recipe.nutrition.is_none());
    recipe.validate()?;

    Ok(())
}

#[test]
fn test_recipe_writes_camel_case_fields() -> anyhow::Result<()> {
    let mut nutrition = Nutrition::new();
    nutrition.insert("protein".to_string(), "12g".to_string());

    let recipe = Recipe {
        id: RecipeId::new(9),
        name: "Greek Salad".to_string(),
        description: "Crisp and bright.".to_string(),
        image: String::new(),
        category: "Mediterranean".to_string(),
        difficulty: Difficulty::Easy,
        prep_time: PrepTime::Minutes(15),
        servings: 2,
        calories: 250,
        rating: 4.0,
        ingredients: vec!["feta".to_string(), "olives".to_string()],
        nutrition: Some(nutrition),
    };

    let value = serde_json::to_value(&recipe)?;
    assert_eq!(value["prepTime"], json!(15));
    assert_eq!(value["difficulty"], json!("Easy"));
    assert_eq!(value["nutrition"]["protein"], json!("12g"));
    assert!(value.get("prep_time").is_none());

    Ok(())
}

#[test]
fn test_recipe_validate_rejects_out_of_range_rating() {
    let recipe: Recipe = serde_json::from_value(json!({
        "id": 3,
        "name": "Mystery",
        "category": "Other",
        "difficulty": "Hard",
        "prepTime": 10,
        "rating": 5.5
    }))
    .unwrap();

    let err = recipe.validate().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_unknown_difficulty_fails_to_decode() {
    let result: std::result::Result<Recipe, _> = serde_json::from_value(json!({
        "id": 3,
        "name": "Mystery",
        "category": "Other",
        "difficulty": "Impossible",
        "prepTime": 10,
        "rating": 3.0
    }));
    assert!(result.is_err());
}

#[test]
fn test_filter_settings_serialize_selectors_as_labels() -> anyhow::Result<()> {
    let mut settings = FilterSettings::default();
    settings.category = CategoryFilter::Only("Indian".to_string());

    let value = serde_json::to_value(&settings)?;
    assert_eq!(value["category"], json!("Indian"));
    assert_eq!(value["difficulty"], json!("All"));
    assert_eq!(value["maxPrepTime"], json!(120));

    let back: FilterSettings = serde_json::from_value(value)?;
    assert_eq!(back, settings);

    Ok(())
}

#[test]
fn test_draft_decodes_with_defaults() -> anyhow::Result<()> {
    let draft: RecipeDraft = serde_json::from_value(json!({
        "name": "Pancakes",
        "description": "Fluffy",
        "ingredients": ["flour", "milk", "eggs"],
        "prepTime": "20 mins"
    }))?;

    assert_eq!(draft.difficulty, Difficulty::Easy);
    assert_eq!(draft.servings, 1);
    assert_eq!(draft.prep_time.minutes(), Some(20));

    Ok(())
}
