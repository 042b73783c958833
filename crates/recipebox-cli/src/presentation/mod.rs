//! Console presentation.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                        ==(plain)==> Display
//! ```
//!
//! View models carry raw values (ratings as numbers, ids as ids) so the
//! JSON output stays usable by scripts. Layout lives in the `Display` impls.
//! Per-card detail toggles are presentation state and live in [`CardStates`].

pub mod cards;
pub mod presenters;
pub mod renderer;
pub mod view_models;

pub use cards::CardStates;
pub use renderer::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, Guidance};
