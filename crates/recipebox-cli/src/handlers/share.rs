use crate::capabilities::{TerminalClipboard, TerminalShare};
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{
    CommandResultViewModel, Delivery, PayloadKind, PayloadViewModel,
};
use anyhow::{Result, anyhow};
use recipebox_runtime::{CatalogStore, ShareOutcome, Unavailable};
use recipebox_types::RecipeId;

pub fn handle(ctx: &ExecutionContext, id: RecipeId, copy: bool) -> Result<()> {
    let store = ctx.load_store()?;
    let result = share_payload(&store, id, copy)?;
    ctx.renderer().render(&result)
}

pub fn handle_ingredients(ctx: &ExecutionContext, id: RecipeId) -> Result<()> {
    let store = ctx.load_store()?;
    let result = ingredients_payload(&store, id)?;
    ctx.renderer().render(&result)
}

/// Share through the terminal stand-in, or straight to the clipboard when
/// `copy` is set.
pub(crate) fn share_payload(
    store: &CatalogStore,
    id: RecipeId,
    copy: bool,
) -> Result<CommandResultViewModel<PayloadViewModel>> {
    let mut target = TerminalShare::default();
    let mut clipboard = TerminalClipboard::default();

    let outcome = if copy {
        store.share(id, &mut Unavailable, &mut clipboard)?
    } else {
        store.share(id, &mut target, &mut clipboard)?
    };

    let (delivered, text) = match outcome {
        ShareOutcome::Shared => (Delivery::Shared, target.shared),
        ShareOutcome::CopiedToClipboard => (Delivery::Clipboard, clipboard.contents),
    };
    let text = text.ok_or_else(|| anyhow!("share of recipe {} produced no text", id))?;

    Ok(presenters::present_payload(id, PayloadKind::Share, delivered, text))
}

pub(crate) fn ingredients_payload(
    store: &CatalogStore,
    id: RecipeId,
) -> Result<CommandResultViewModel<PayloadViewModel>> {
    let mut clipboard = TerminalClipboard::default();
    store.copy_ingredients(id, &mut clipboard)?;
    let text = clipboard
        .contents
        .ok_or_else(|| anyhow!("ingredients of recipe {} produced no text", id))?;

    Ok(presenters::present_payload(
        id,
        PayloadKind::Ingredients,
        Delivery::Clipboard,
        text,
    ))
}
