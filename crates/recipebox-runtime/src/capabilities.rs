//! External capabilities the store hands payloads to.
//!
//! Sharing and clipboard access live outside the catalog. The store only
//! builds the text; whoever embeds it decides where the text goes.

use crate::Result;

/// Native share sheet (or whatever stands in for it)
pub trait ShareTarget {
    /// `false` makes the store fall back to the clipboard.
    fn is_available(&self) -> bool;

    fn share(&mut self, title: &str, text: &str) -> Result<()>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Where a shared recipe ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard,
}

/// A share target that is never available, forcing the clipboard fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl ShareTarget for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&mut self, _title: &str, _text: &str) -> Result<()> {
        Err(crate::Error::Capability("sharing is not available".to_string()))
    }
}
