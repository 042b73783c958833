use super::apply_filter_args;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::{CardStates, presenters};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, filters: &FilterArgs, details: bool) -> Result<()> {
    let mut store = ctx.load_store()?;
    apply_filter_args(&mut store, filters)?;

    let cards = if details {
        CardStates::all_expanded()
    } else {
        CardStates::new()
    };

    ctx.renderer().render(&presenters::present_list(&store, &cards))
}
