use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use recipebox_types::{
    CategoryFilter, Difficulty, DifficultyFilter, PrepTime, RecipeId, SortKey,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Browse, filter and share recipes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to RECIPEBOX_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Exported catalog to browse instead of the built-in examples
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show recipe cards matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Expand every card with ingredients and nutrition
        #[arg(long)]
        details: bool,
    },

    /// Count and averages for the filtered recipes
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Category buttons available in the catalog
    Categories,

    /// One expanded recipe card
    Show { id: RecipeId },

    /// Create a recipe from the new-recipe form fields
    Add(AddArgs),

    /// Write the catalog as JSON
    Export {
        /// Destination file (defaults to the configured export file, recipes.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Produce the share text for a recipe
    Share {
        id: RecipeId,

        /// Skip the share target and copy to the clipboard instead
        #[arg(long)]
        copy: bool,
    },

    /// Copy a recipe's ingredient list
    Ingredients { id: RecipeId },

    /// Interactive session: one intent per line on stdin
    Shell,
}

/// View-state flags shared by `list` and `stats`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, description and ingredients
    #[arg(long, short)]
    pub search: Option<String>,

    /// Category label, or "All"
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Easy, Medium, Hard, or "All"
    #[arg(long)]
    pub difficulty: Option<DifficultyFilter>,

    /// Minimum rating (clamped to 0-5)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum prep time in minutes
    #[arg(long)]
    pub max_prep_time: Option<u32>,

    /// Maximum calories
    #[arg(long)]
    pub max_calories: Option<u32>,

    /// none, rating, difficulty, prepTime or calories
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Mark a recipe as favorite (repeatable)
    #[arg(long = "favorite", value_name = "ID")]
    pub favorites: Vec<RecipeId>,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    /// One ingredient (repeatable, order is kept)
    #[arg(long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Minutes, or text such as "45 mins"
    #[arg(long)]
    pub prep_time: Option<PrepTime>,

    #[arg(long)]
    pub servings: Option<u32>,

    #[arg(long)]
    pub calories: Option<u32>,

    #[arg(long)]
    pub image: Option<String>,

    /// Nutrition entry as name=value, e.g. protein=12g (repeatable)
    #[arg(long = "nutrient", value_name = "NAME=VALUE")]
    pub nutrients: Vec<String>,

    /// Also export the catalog including the new recipe
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
