use serde::{Deserialize, Serialize};

use super::recipe::{Difficulty, Nutrition, PrepTime, Recipe, RecipeId};
use crate::{Error, Result};

/// Category assigned when the intake form leaves it blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// A recipe submitted through the new-recipe form, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub prep_time: PrepTime,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

fn default_servings() -> u32 {
    1
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: None,
            category: None,
            difficulty: default_difficulty(),
            prep_time: PrepTime::default(),
            servings: default_servings(),
            calories: 0,
            ingredients: Vec::new(),
            nutrition: None,
        }
    }

    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn prep_time(mut self, prep_time: PrepTime) -> Self {
        self.prep_time = prep_time;
        self
    }

    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Turn the draft into a catalog record.
    ///
    /// Name, description and at least one non-blank ingredient are required.
    /// Blank ingredient lines are dropped and the rating starts at 0.
    pub fn into_recipe(self, id: RecipeId) -> Result<Recipe> {
        let name = self.name.trim().to_string();
        let description = self.description.trim().to_string();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if description.is_empty() {
            missing.push("description");
        }

        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(String::from)
            .collect();
        if ingredients.is_empty() {
            missing.push("ingredients");
        }

        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        if self.servings == 0 {
            return Err(Error::Validation(
                "servings must be at least 1".to_string(),
            ));
        }

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Recipe {
            id,
            name,
            description,
            image: self.image.unwrap_or_default(),
            category,
            difficulty: self.difficulty,
            prep_time: self.prep_time,
            servings: self.servings,
            calories: self.calories,
            rating: 0.0,
            ingredients,
            nutrition: self.nutrition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_name() {
        let draft = RecipeDraft::new("  ", "Tasty").ingredient("salt");
        let err = draft.into_recipe(RecipeId::new(1)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_draft_requires_non_blank_ingredient() {
        let draft = RecipeDraft::new("Soup", "Warm").ingredient("   ").ingredient("");
        let err = draft.into_recipe(RecipeId::new(1)).unwrap_err();
        assert!(err.to_string().contains("ingredients"));
    }

    #[test]
    fn test_draft_reports_every_missing_field() {
        let err = RecipeDraft::new("", "")
            .into_recipe(RecipeId::new(1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: missing required fields: name, description, ingredients"
        );
    }

    #[test]
    fn test_draft_into_recipe_trims_and_defaults() {
        let recipe = RecipeDraft::new(" Toast ", "Crunchy bread")
            .ingredient(" bread ")
            .ingredient("")
            .ingredient("butter")
            .into_recipe(RecipeId::new(7))
            .unwrap();

        assert_eq!(recipe.id, RecipeId::new(7));
        assert_eq!(recipe.name, "Toast");
        assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
        assert_eq!(recipe.rating, 0.0);
        assert_eq!(recipe.category, DEFAULT_CATEGORY);
        assert_eq!(recipe.image, "");
    }
}
