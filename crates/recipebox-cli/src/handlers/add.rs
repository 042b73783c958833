use crate::args::AddArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::Guidance;
use anyhow::{Context, Result, bail};
use recipebox_runtime::{IntentOutcome, StoreIntent};
use recipebox_types::{Nutrition, RecipeDraft};

pub fn handle(ctx: &ExecutionContext, args: AddArgs) -> Result<()> {
    let mut store = ctx.load_store()?;
    let output = args.output.clone();
    let draft = draft_from_args(args)?;

    let IntentOutcome::Added(id) = store.apply(StoreIntent::AddRecipe(draft))? else {
        bail!("recipe was not added");
    };

    if let Some(path) = &output {
        store
            .export_to(path)
            .with_context(|| format!("Failed to export catalog: {}", path.display()))?;
    }

    let tip = Guidance::new("New recipes only live for this run unless exported")
        .with_command("recipebox add ... --output recipes.json");
    let result = presenters::present_added(&store, id, output.as_deref(), tip)?;
    ctx.renderer().render(&result)
}

fn draft_from_args(args: AddArgs) -> Result<RecipeDraft> {
    let mut draft = RecipeDraft::new(args.name, args.description);
    draft.ingredients = args.ingredients;
    draft.category = args.category;
    draft.image = args.image;

    if let Some(difficulty) = args.difficulty {
        draft.difficulty = difficulty;
    }
    if let Some(prep_time) = args.prep_time {
        draft.prep_time = prep_time;
    }
    if let Some(servings) = args.servings {
        draft.servings = servings;
    }
    if let Some(calories) = args.calories {
        draft.calories = calories;
    }
    if !args.nutrients.is_empty() {
        draft.nutrition = Some(parse_nutrients(&args.nutrients)?);
    }

    Ok(draft)
}

fn parse_nutrients(entries: &[String]) -> Result<Nutrition> {
    let mut nutrition = Nutrition::new();
    for entry in entries {
        let Some((name, value)) = entry.split_once('=') else {
            bail!("nutrient '{}' must look like name=value", entry);
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            bail!("nutrient '{}' must look like name=value", entry);
        }
        nutrition.insert(name.to_string(), value.to_string());
    }
    Ok(nutrition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nutrients() {
        let nutrition =
            parse_nutrients(&["protein = 12g".to_string(), "fat=3g".to_string()]).unwrap();
        assert_eq!(nutrition.get("protein").map(String::as_str), Some("12g"));
        assert_eq!(nutrition.get("fat").map(String::as_str), Some("3g"));
    }

    #[test]
    fn test_parse_nutrients_rejects_missing_value() {
        assert!(parse_nutrients(&["protein".to_string()]).is_err());
        assert!(parse_nutrients(&["protein=".to_string()]).is_err());
    }
}
