pub mod capabilities;
pub mod config;
pub mod error;
pub mod intent;
pub mod store;

pub use capabilities::{Clipboard, ShareOutcome, ShareTarget, Unavailable};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use intent::{IntentOutcome, StoreIntent};
pub use store::CatalogStore;

pub use recipebox_engine::{CatalogStats, EXPORT_FILE_NAME};
