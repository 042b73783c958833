use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, output: Option<PathBuf>) -> Result<()> {
    let store = ctx.load_store()?;
    let path = output.unwrap_or_else(|| ctx.default_export_path());

    store
        .export_to(&path)
        .with_context(|| format!("Failed to export catalog: {}", path.display()))?;

    ctx.renderer()
        .render(&presenters::present_export(&path, store.recipes().len()))
}
