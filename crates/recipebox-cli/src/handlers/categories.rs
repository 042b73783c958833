use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.load_store()?;
    ctx.renderer().render(&presenters::present_categories(&store))
}
