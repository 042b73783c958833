use super::apply_filter_args;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, filters: &FilterArgs) -> Result<()> {
    let mut store = ctx.load_store()?;
    apply_filter_args(&mut store, filters)?;
    ctx.renderer().render(&presenters::present_stats(&store))
}
