mod args;
mod capabilities;
mod commands;
mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{AddArgs, Cli, Commands, FilterArgs};
pub use commands::run;
pub use handlers::shell::{ShellCommand, parse_shell_command};
