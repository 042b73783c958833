use std::fmt;

/// Result type for recipebox-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Catalog rule violated (validation, unknown id, bad filter value)
    Catalog(recipebox_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Neither the share target nor the clipboard accepted the payload
    Capability(String),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Catalog(recipebox_types::Error::Validation(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Catalog(recipebox_types::Error::NotFound(_)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Capability(msg) => write!(f, "Capability unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // Catalog errors display as themselves; skip a level so `{:#}` does not repeat them
            Error::Catalog(err) => err.source(),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Capability(_) => None,
        }
    }
}

impl From<recipebox_types::Error> for Error {
    fn from(err: recipebox_types::Error) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
