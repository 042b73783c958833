//! Terminal stand-ins for the share sheet and the clipboard.
//!
//! A terminal has neither, so both capture the payload and the handler
//! renders it; the user copies it from the output.

use recipebox_runtime::{Clipboard, Result, ShareTarget};

#[derive(Debug, Default)]
pub struct TerminalShare {
    pub shared: Option<String>,
}

impl ShareTarget for TerminalShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&mut self, _title: &str, text: &str) -> Result<()> {
        self.shared = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TerminalClipboard {
    pub contents: Option<String>,
}

impl Clipboard for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
