use crate::{Error, Result};
use recipebox_types::SortKey;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RECIPEBOX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.recipebox (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("RECIPEBOX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("recipebox"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".recipebox"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_export_file() -> String {
    recipebox_engine::EXPORT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Exported catalog to start from instead of the built-in examples
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default = "default_export_file")]
    pub export_file: String,

    #[serde(default)]
    pub default_sort: SortKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            export_file: default_export_file(),
            default_sort: SortKey::Unsorted,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Catalog path, resolved against `data_dir` when relative.
    pub fn catalog_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| {
            let expanded = expand_tilde(&p.to_string_lossy());
            if expanded.is_absolute() {
                expanded
            } else {
                data_dir.join(expanded)
            }
        })
    }
}
