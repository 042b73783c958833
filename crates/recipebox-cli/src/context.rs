use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use recipebox_runtime::{CatalogStore, Config, resolve_data_dir};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::Cli;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    catalog_override: Option<PathBuf>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
        debug!(data_dir = %data_dir.display(), "resolved data dir");

        Ok(Self {
            data_dir,
            config,
            catalog_override: cli.catalog.clone(),
            format: cli.format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Colors only for plain output to a terminal
    pub fn renderer(&self) -> ConsoleRenderer {
        let color = !self.json() && std::io::stdout().is_terminal();
        ConsoleRenderer::new(self.json()).with_color(color)
    }

    /// Fresh session store: `--catalog`, then the configured catalog, then the examples.
    pub fn load_store(&self) -> Result<CatalogStore> {
        let catalog = self
            .catalog_override
            .clone()
            .or_else(|| self.config.catalog_path(&self.data_dir));

        let mut store = match catalog {
            Some(path) => CatalogStore::load(&path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => CatalogStore::new(),
        };

        store.set_sort_key(self.config.default_sort);
        Ok(store)
    }

    /// Where `export` writes when no `--output` is given
    pub fn default_export_path(&self) -> PathBuf {
        PathBuf::from(&self.config.export_file)
    }
}
