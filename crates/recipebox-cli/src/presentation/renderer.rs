use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use super::view_models::CommandResultViewModel;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, result)
    }

    pub fn render_to<T>(&self, out: &mut dyn Write, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            writeln!(out)?;
            if self.color {
                writeln!(out, "{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  - {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Report a failed shell line without ending the session
    pub fn render_error(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        if self.json_mode {
            let value = serde_json::json!({ "error": message });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        } else if self.color {
            writeln!(out, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(out, "Error: {}", message)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{AckViewModel, Guidance};

    fn render(json: bool, result: &CommandResultViewModel<AckViewModel>) -> String {
        let mut buf = Vec::new();
        ConsoleRenderer::new(json).render_to(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_with_tip() {
        let result = CommandResultViewModel::new(AckViewModel {
            message: "Sorted by rating".to_string(),
            shown: 3,
        })
        .with_suggestion(Guidance::new("Reset the view").with_command("reset"));

        assert_eq!(
            render(false, &result),
            "Sorted by rating (3 shown)\n\nTips:\n  - Reset the view: reset\n"
        );
    }

    #[test]
    fn test_json_envelope() {
        let result = CommandResultViewModel::new(AckViewModel {
            message: "ok".to_string(),
            shown: 0,
        });
        let value: serde_json::Value = serde_json::from_str(&render(true, &result)).unwrap();
        assert_eq!(value["content"]["shown"], 0);
        assert!(value.get("suggestions").is_none());
    }
}
