use recipebox_runtime::CatalogStats;
use recipebox_types::{FilterSettings, Nutrition, RecipeId, SortKey};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

// --------------------------------------------------------------------
// Recipe card
// --------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCardViewModel {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub difficulty: String,
    pub prep_time: String,
    pub rating: f64,
    pub servings: u32,
    pub calories: u32,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CardDetailsViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardDetailsViewModel {
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl fmt::Display for RecipeCardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)?;
        if self.is_favorite {
            write!(f, " [favorite]")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "   {} | {} | {} | {:.1}/5 | {} kcal | serves {}",
            self.category,
            self.difficulty,
            self.prep_time,
            self.rating,
            self.calories,
            self.servings
        )?;
        if !self.description.is_empty() {
            writeln!(f, "   {}", self.description)?;
        }

        if let Some(details) = &self.details {
            writeln!(f, "   Ingredients:")?;
            for ingredient in &details.ingredients {
                writeln!(f, "     - {}", ingredient)?;
            }
            if let Some(nutrition) = &details.nutrition
                && !nutrition.is_empty()
            {
                let entries: Vec<String> = nutrition
                    .iter()
                    .map(|(name, value)| format!("{} {}", name, value))
                    .collect();
                writeln!(f, "   Nutrition: {}", entries.join(", "))?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------------------
// Recipe list
// --------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecipeListViewModel {
    pub filters: FilterSettings,
    pub sort: SortKey,
    pub stats: CatalogStats,
    pub recipes: Vec<RecipeCardViewModel>,
}

impl fmt::Display for RecipeListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", FilterLine(&self.filters, self.sort))?;
        writeln!(f, "{}", StatsLine(&self.stats))?;

        if self.recipes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No recipes match the current filters.")?;
            return Ok(());
        }

        for card in &self.recipes {
            writeln!(f)?;
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct StatsViewModel {
    pub filters: FilterSettings,
    pub stats: CatalogStats,
}

impl fmt::Display for StatsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipes:          {}", self.stats.count)?;
        writeln!(f, "Average rating:   {:.1}", self.stats.average_rating)?;
        writeln!(f, "Average prep:     {} min", self.stats.average_prep_time)?;
        writeln!(f, "Favorites:        {}", self.stats.favorite_count)
    }
}

struct FilterLine<'a>(&'a FilterSettings, SortKey);

impl fmt::Display for FilterLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        write!(
            f,
            "Filters: search=\"{}\" category={} difficulty={} minRating={} maxPrepTime={} maxCalories={} sort={}",
            s.search, s.category, s.difficulty, s.min_rating, s.max_prep_time, s.max_calories, self.1
        )
    }
}

struct StatsLine<'a>(&'a CatalogStats);

impl fmt::Display for StatsLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        write!(
            f,
            "{} {} | avg rating {:.1} | avg prep {} min | {} {}",
            s.count,
            plural(s.count, "recipe", "recipes"),
            s.average_rating,
            s.average_prep_time,
            s.favorite_count,
            plural(s.favorite_count, "favorite", "favorites")
        )
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

// --------------------------------------------------------------------
// Smaller results
// --------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CategoriesViewModel {
    pub categories: Vec<String>,
    pub selected: String,
}

impl fmt::Display for CategoriesViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in &self.categories {
            let marker = if *category == self.selected { "*" } else { " " };
            writeln!(f, "{} {}", marker, category)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportViewModel {
    pub path: String,
    pub recipe_count: usize,
}

impl fmt::Display for ExportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported {} {} to {}",
            self.recipe_count,
            plural(self.recipe_count, "recipe", "recipes"),
            self.path
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedRecipeViewModel {
    pub recipe: RecipeCardViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<String>,
}

impl fmt::Display for AddedRecipeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added recipe #{}", self.recipe.id)?;
        writeln!(f)?;
        write!(f, "{}", self.recipe)?;
        if let Some(path) = &self.exported_to {
            writeln!(f)?;
            writeln!(f, "Catalog exported to {}", path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Share,
    Ingredients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Shared,
    Clipboard,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadViewModel {
    pub recipe_id: RecipeId,
    pub kind: PayloadKind,
    pub delivered: Delivery,
    pub text: String,
}

impl fmt::Display for PayloadViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delivered == Delivery::Clipboard {
            writeln!(f, "Copied to clipboard:")?;
        }
        writeln!(f, "{}", self.text)
    }
}

/// Acknowledgement for a shell intent that changed view state
#[derive(Debug, Serialize)]
pub struct AckViewModel {
    pub message: String,
    pub shown: usize,
}

impl fmt::Display for AckViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} shown)", self.message, self.shown)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceViewModel {
    pub config_path: String,
    pub recipe_count: usize,
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "recipebox - browse, filter and share recipes")?;
        writeln!(f)?;
        writeln!(f, "{} recipes in the catalog.", self.recipe_count)?;
        writeln!(f)?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  recipebox list                      # All recipe cards")?;
        writeln!(f, "  recipebox list --search garlic      # Search names, descriptions, ingredients")?;
        writeln!(f, "  recipebox list --sort difficulty    # Easiest first")?;
        writeln!(f, "  recipebox shell                     # Interactive session")?;
        writeln!(f)?;
        writeln!(f, "Config: {}", self.config_path)
    }
}

#[derive(Debug, Serialize)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HelpViewModel {
    pub commands: Vec<HelpEntry>,
}

impl fmt::Display for HelpViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.commands.iter().map(|c| c.usage.len()).max().unwrap_or(0);
        for entry in &self.commands {
            writeln!(f, "  {:<width$}  {}", entry.usage, entry.summary, width = width)?;
        }
        Ok(())
    }
}
