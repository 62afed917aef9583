//! Output formatting for CLI commands

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    ///
    /// Text mode falls back to pretty JSON; callers normally render text
    /// themselves.
    pub fn data<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        }
        .context("Failed to serialize output")?;
        println!("{}", json);
        Ok(())
    }

    /// Prints pre-rendered text (ignored in JSON mode)
    pub fn text(&self, text: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", text);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn data_reports_serialization_failure() {
        // JSON object keys must be strings
        let mut bad = HashMap::new();
        bad.insert((1, 2), "pair");

        let err = Output::new(OutputFormat::Json).data(&bad).unwrap_err();
        assert!(err.to_string().contains("Failed to serialize output"));
    }

    #[test]
    fn data_accepts_records() {
        let output = Output::new(OutputFormat::Json);
        assert!(output.data(&serde_json::json!({ "name": "Espresso" })).is_ok());
    }
}
