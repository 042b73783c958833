//! Interactive session: one intent per input line.
//!
//! The session owns a single store and a single set of card toggles for its
//! whole lifetime, so filters, favorites and added recipes carry over from
//! line to line. A bad line is reported and the session keeps going.

use super::share::{ingredients_payload, share_payload};
use crate::context::ExecutionContext;
use crate::presentation::view_models::{Guidance, HelpEntry, HelpViewModel};
use crate::presentation::{CardStates, CommandResultViewModel, ConsoleRenderer, presenters};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use recipebox_runtime::{CatalogStore, IntentOutcome, StoreIntent};
use recipebox_types::{AdvancedFilter, CategoryFilter, RecipeDraft, RecipeId, SortKey};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "recipebox> ";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Empty,
    Intent(StoreIntent),
    Details(RecipeId),
    List,
    Stats,
    Categories,
    Show(RecipeId),
    Share(RecipeId),
    Copy(RecipeId),
    Export(Option<PathBuf>),
    Help,
    Quit,
}

pub fn parse_shell_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ShellCommand::Empty);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" => ShellCommand::Intent(StoreIntent::Search(rest.to_string())),
        "category" => {
            let category = rest.parse::<CategoryFilter>().map_err(|e| e.to_string())?;
            ShellCommand::Intent(StoreIntent::Category(category))
        }
        "filter" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: filter <field> <value>".to_string())?;
            let update = AdvancedFilter::parse(field, value).map_err(|e| e.to_string())?;
            ShellCommand::Intent(StoreIntent::Filter(update))
        }
        "sort" => {
            let key = rest.parse::<SortKey>().map_err(|e| e.to_string())?;
            ShellCommand::Intent(StoreIntent::Sort(key))
        }
        "fav" | "favorite" => ShellCommand::Intent(StoreIntent::ToggleFavorite(parse_id(rest)?)),
        "reset" => ShellCommand::Intent(StoreIntent::ResetFilters),
        "add" => {
            if rest.is_empty() {
                return Err("usage: add <json draft>".to_string());
            }
            let draft: RecipeDraft =
                serde_json::from_str(rest).map_err(|e| format!("invalid recipe draft: {}", e))?;
            ShellCommand::Intent(StoreIntent::AddRecipe(draft))
        }
        "details" => ShellCommand::Details(parse_id(rest)?),
        "list" | "ls" => ShellCommand::List,
        "stats" => ShellCommand::Stats,
        "categories" => ShellCommand::Categories,
        "show" => ShellCommand::Show(parse_id(rest)?),
        "share" => ShellCommand::Share(parse_id(rest)?),
        "copy" => ShellCommand::Copy(parse_id(rest)?),
        "export" => ShellCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(command)
}

fn parse_id(raw: &str) -> Result<RecipeId, String> {
    if raw.is_empty() {
        return Err("missing recipe id".to_string());
    }
    raw.parse::<RecipeId>().map_err(|e| e.to_string())
}

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.load_store()?;
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();

    let mut session = ShellSession::new(store, ctx.renderer(), ctx.default_export_path());
    session.prompt = prompt;
    session.run(stdin.lock(), std::io::stdout().lock())
}

enum Flow {
    Continue,
    Quit,
}

pub struct ShellSession {
    store: CatalogStore,
    cards: CardStates,
    renderer: ConsoleRenderer,
    export_path: PathBuf,
    prompt: bool,
}

impl ShellSession {
    pub fn new(store: CatalogStore, renderer: ConsoleRenderer, export_path: PathBuf) -> Self {
        Self {
            store,
            cards: CardStates::new(),
            renderer,
            export_path,
            prompt: false,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read shell input")?;

            let command = match parse_shell_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    self.renderer.render_error(&mut out, &message)?;
                    continue;
                }
            };
            debug!(?command, "shell command");

            match self.execute(command, &mut out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => self.renderer.render_error(&mut out, &format!("{:#}", err))?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: ShellCommand, out: &mut dyn Write) -> Result<Flow> {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Intent(intent) => self.apply(intent, out)?,
            ShellCommand::Details(id) => {
                self.store.recipe(id)?;
                let open = self.cards.toggle(id);
                let message = if open {
                    format!("Details shown for recipe {}", id)
                } else {
                    format!("Details hidden for recipe {}", id)
                };
                self.renderer
                    .render_to(out, &presenters::present_ack(message, &self.store))?;
            }
            ShellCommand::List => self
                .renderer
                .render_to(out, &presenters::present_list(&self.store, &self.cards))?,
            ShellCommand::Stats => self
                .renderer
                .render_to(out, &presenters::present_stats(&self.store))?,
            ShellCommand::Categories => self
                .renderer
                .render_to(out, &presenters::present_categories(&self.store))?,
            ShellCommand::Show(id) => {
                let result = presenters::present_recipe(&self.store, id)?;
                self.renderer.render_to(out, &result)?;
            }
            ShellCommand::Share(id) => {
                let result = share_payload(&self.store, id, false)?;
                self.renderer.render_to(out, &result)?;
            }
            ShellCommand::Copy(id) => {
                let result = ingredients_payload(&self.store, id)?;
                self.renderer.render_to(out, &result)?;
            }
            ShellCommand::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                self.store
                    .export_to(&path)
                    .with_context(|| format!("Failed to export catalog: {}", path.display()))?;
                let result = presenters::present_export(&path, self.store.recipes().len());
                self.renderer.render_to(out, &result)?;
            }
            ShellCommand::Help => self.renderer.render_to(out, &help())?,
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, intent: StoreIntent, out: &mut dyn Write) -> Result<()> {
        let message = describe(&intent);

        match self.store.apply(intent)? {
            IntentOutcome::ViewUpdated => {
                let message = message.unwrap_or_else(|| "View updated".to_string());
                self.renderer
                    .render_to(out, &presenters::present_ack(message, &self.store))?;
            }
            IntentOutcome::Favorite { id, favorite } => {
                let message = if favorite {
                    format!("Recipe {} added to favorites", id)
                } else {
                    format!("Recipe {} removed from favorites", id)
                };
                self.renderer
                    .render_to(out, &presenters::present_ack(message, &self.store))?;
            }
            IntentOutcome::Added(id) => {
                let tip = Guidance::new("New recipes only live for this session unless exported")
                    .with_command("export [path]");
                let result = presenters::present_added(&self.store, id, None, tip)?;
                self.renderer.render_to(out, &result)?;
            }
        }
        Ok(())
    }
}

fn describe(intent: &StoreIntent) -> Option<String> {
    let message = match intent {
        StoreIntent::Search(term) if term.trim().is_empty() => "Search cleared".to_string(),
        StoreIntent::Search(term) => format!("Searching for \"{}\"", term.trim()),
        StoreIntent::Category(category) => format!("Category: {}", category),
        StoreIntent::Filter(AdvancedFilter::Difficulty(difficulty)) => {
            format!("Difficulty: {}", difficulty)
        }
        StoreIntent::Filter(AdvancedFilter::MinRating(rating)) => format!("Min rating: {}", rating),
        StoreIntent::Filter(AdvancedFilter::MaxPrepTime(minutes)) => {
            format!("Max prep time: {} min", minutes)
        }
        StoreIntent::Filter(AdvancedFilter::MaxCalories(calories)) => {
            format!("Max calories: {}", calories)
        }
        StoreIntent::Sort(key) => format!("Sorted by {}", key),
        StoreIntent::ResetFilters => "Filters reset".to_string(),
        StoreIntent::ToggleFavorite(_) | StoreIntent::AddRecipe(_) => return None,
    };
    Some(message)
}

fn help() -> CommandResultViewModel<HelpViewModel> {
    let entry = |usage, summary| HelpEntry { usage, summary };
    CommandResultViewModel::new(HelpViewModel {
        commands: vec![
            entry("search <text>", "Match name, description or ingredients"),
            entry("category <label|All>", "Show one category"),
            entry("filter <field> <value>", "difficulty, minRating, maxPrepTime, maxCalories"),
            entry("sort <key>", "none, rating, difficulty, prepTime, calories"),
            entry("reset", "Clear search and filters (sort is kept)"),
            entry("fav <id>", "Toggle a favorite"),
            entry("details <id>", "Toggle a card's ingredients and nutrition"),
            entry("list", "Show the current cards"),
            entry("stats", "Count and averages for the current cards"),
            entry("categories", "Category labels in the catalog"),
            entry("show <id>", "One expanded card"),
            entry("share <id>", "Share text for a recipe"),
            entry("copy <id>", "Copy a recipe's ingredients"),
            entry("add <json>", "Add a recipe from a JSON draft"),
            entry("export [path]", "Write the catalog as JSON"),
            entry("quit", "Leave the shell"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_lines(lines: &str) -> (ShellSession, String) {
        let mut session = ShellSession::new(
            CatalogStore::new(),
            ConsoleRenderer::new(false),
            PathBuf::from("recipes.json"),
        );
        let mut out = Vec::new();
        session.run(Cursor::new(lines.to_string()), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_intents() {
        assert_eq!(
            parse_shell_command("search  Garlic "),
            Ok(ShellCommand::Intent(StoreIntent::Search("Garlic".to_string())))
        );
        assert_eq!(
            parse_shell_command("category Indian"),
            Ok(ShellCommand::Intent(StoreIntent::Category(CategoryFilter::Only(
                "Indian".to_string()
            ))))
        );
        assert_eq!(
            parse_shell_command("sort prep-time"),
            Ok(ShellCommand::Intent(StoreIntent::Sort(SortKey::PrepTime)))
        );
        assert_eq!(
            parse_shell_command("filter maxCalories 500"),
            Ok(ShellCommand::Intent(StoreIntent::Filter(AdvancedFilter::MaxCalories(500))))
        );
        assert_eq!(
            parse_shell_command("fav 2"),
            Ok(ShellCommand::Intent(StoreIntent::ToggleFavorite(RecipeId::new(2))))
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_shell_command("   "), Ok(ShellCommand::Empty));
        assert_eq!(parse_shell_command("# note"), Ok(ShellCommand::Empty));
        assert_eq!(parse_shell_command("EXIT"), Ok(ShellCommand::Quit));
        assert_eq!(parse_shell_command("export"), Ok(ShellCommand::Export(None)));
        assert_eq!(
            parse_shell_command("export out/all.json"),
            Ok(ShellCommand::Export(Some(PathBuf::from("out/all.json"))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_shell_command("dance").is_err());
        assert!(parse_shell_command("fav").is_err());
        assert!(parse_shell_command("fav abc").is_err());
        assert!(parse_shell_command("filter maxCalories").is_err());
        assert!(parse_shell_command("filter maxCalories -5").is_err());
        assert!(parse_shell_command("sort spiciness").is_err());
        assert!(parse_shell_command("add {not json").is_err());
    }

    #[test]
    fn test_parse_add_draft() {
        let cmd = parse_shell_command(
            r#"add {"name":"Toast","description":"Bread, but hot","ingredients":["bread"]}"#,
        )
        .unwrap();
        let ShellCommand::Intent(StoreIntent::AddRecipe(draft)) = cmd else {
            panic!("expected an add intent");
        };
        assert_eq!(draft.name, "Toast");
        assert_eq!(draft.ingredients, vec!["bread".to_string()]);
    }

    #[test]
    fn test_session_keeps_state_between_lines() {
        let (session, output) = run_lines("fav 1\nsearch curry\nfav 999\nsort rating\nquit\nlist\n");

        assert!(session.store().is_favorite(RecipeId::new(1)));
        assert_eq!(session.store().filters().search, "curry");
        assert_eq!(session.store().sort_key(), SortKey::Rating);
        assert!(output.contains("Recipe 1 added to favorites (3 shown)"));
        assert!(output.contains("Searching for \"curry\" (1 shown)"));
        assert!(output.contains("Error: Not found"));
        // nothing after quit runs
        assert!(!output.contains("Filters:"));
    }

    #[test]
    fn test_session_details_toggle() {
        let (_, output) = run_lines("details 3\nlist\ndetails 3\ndetails 42\n");
        assert!(output.contains("Details shown for recipe 3"));
        assert!(output.contains("Ingredients:"));
        assert!(output.contains("Details hidden for recipe 3"));
        assert!(output.contains("Error: Not found"));
    }

    #[test]
    fn test_session_add_rejects_incomplete_draft() {
        let (session, output) = run_lines(r#"add {"name":"","description":"x"}"#);
        assert_eq!(session.store().recipes().len(), 3);
        assert!(output.contains("Error: Validation error"));
    }

    #[test]
    fn test_session_add_tip_uses_shell_export() {
        let (session, output) = run_lines(
            r#"add {"name":"Toast","description":"Bread, but hot","ingredients":["bread"]}"#,
        );
        assert_eq!(session.store().recipes().len(), 4);
        assert!(output.contains("Tips:"));
        assert!(output.contains(": export [path]"));
        assert!(!output.contains("--output"));
    }
}
