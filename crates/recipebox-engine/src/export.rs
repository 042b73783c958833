use recipebox_types::{Error, Recipe, Result};
use std::collections::HashSet;

/// File name offered for a catalog download
pub const EXPORT_FILE_NAME: &str = "recipes.json";

/// Encode the catalog as indented UTF-8 JSON.
pub fn to_json(recipes: &[Recipe]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recipes)?)
}

/// Decode an exported catalog and check it before handing it out.
pub fn from_json(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    validate_catalog(&recipes)?;
    Ok(recipes)
}

/// Per-record checks plus id uniqueness across the catalog.
pub fn validate_catalog(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        recipe.validate()?;
        if !seen.insert(recipe.id) {
            return Err(Error::Validation(format!(
                "duplicate recipe id {}",
                recipe.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_recipes;

    #[test]
    fn test_export_round_trip() {
        let recipes = seed_recipes();
        let json = to_json(&recipes).unwrap();
        assert_eq!(from_json(&json).unwrap(), recipes);
    }

    #[test]
    fn test_export_is_indented() {
        let json = to_json(&seed_recipes()).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"prepTime\": \"45 mins\""));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut recipes = seed_recipes();
        recipes[2].id = recipes[0].id;
        let json = to_json(&recipes).unwrap();

        let err = from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate recipe id 1"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(from_json("{not json"), Err(Error::Json(_))));
    }
}
