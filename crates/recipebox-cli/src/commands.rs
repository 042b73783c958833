use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use crate::presentation::presenters;
use anyhow::Result;
use recipebox_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    let ctx = ExecutionContext::from_cli(&cli)?;

    let Some(command) = cli.command else {
        return show_guidance(&ctx);
    };

    match command {
        Commands::List { filters, details } => handlers::list::handle(&ctx, &filters, details),
        Commands::Stats { filters } => handlers::stats::handle(&ctx, &filters),
        Commands::Categories => handlers::categories::handle(&ctx),
        Commands::Show { id } => handlers::show::handle(&ctx, id),
        Commands::Add(args) => handlers::add::handle(&ctx, args),
        Commands::Export { output } => handlers::export::handle(&ctx, output),
        Commands::Share { id, copy } => handlers::share::handle(&ctx, id, copy),
        Commands::Ingredients { id } => handlers::share::handle_ingredients(&ctx, id),
        Commands::Shell => handlers::shell::handle(&ctx),
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.load_store()?;
    let config_path = Config::path_in(ctx.data_dir());
    ctx.renderer()
        .render(&presenters::present_guidance(&config_path, &store))
}
