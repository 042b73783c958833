use std::fmt;

/// Result type for recipebox-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by every layer that touches the catalog
#[derive(Debug)]
pub enum Error {
    /// A submitted recipe is missing required fields
    Validation(String),

    /// An id does not reference a recipe in the catalog
    NotFound(String),

    /// A filter or sort value is outside its domain
    InvalidInput(String),

    /// Catalog JSON could not be encoded or decoded
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Validation(_) | Error::NotFound(_) | Error::InvalidInput(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
