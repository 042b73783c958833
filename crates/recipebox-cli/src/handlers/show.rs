use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use recipebox_types::RecipeId;

pub fn handle(ctx: &ExecutionContext, id: RecipeId) -> Result<()> {
    let store = ctx.load_store()?;
    let result = presenters::present_recipe(&store, id)?;
    ctx.renderer().render(&result)
}
