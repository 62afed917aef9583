//! Line-oriented prompting for the interactive shell
//!
//! Numeric prompts keep asking until they get something that parses, so
//! nothing non-numeric ever reaches a store.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text
    pub fn say(&mut self, text: &str) -> PromptResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Asks a question and returns the trimmed answer
    pub fn line(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(answer.trim().to_string())
    }

    /// Asks until the answer is not blank
    pub fn required(&mut self, label: &str) -> PromptResult<String> {
        loop {
            let answer = self.line(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("A value is required.")?;
        }
    }

    /// Asks until the answer parses as a `T`
    pub fn number<T: FromStr>(&mut self, label: &str) -> PromptResult<T> {
        loop {
            let answer = self.line(label)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(&format!("'{}' is not a valid whole number.", answer))?,
            }
        }
    }

    /// Like [`number`](Self::number), but a blank answer gives `default`
    pub fn number_or<T: FromStr>(&mut self, label: &str, default: T) -> PromptResult<T> {
        Ok(self.optional_number(label)?.unwrap_or(default))
    }

    /// Like [`number`](Self::number), but a blank answer gives `None`
    pub fn optional_number<T: FromStr>(&mut self, label: &str) -> PromptResult<Option<T>> {
        loop {
            let answer = self.line(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(&format!("'{}' is not a valid whole number.", answer))?,
            }
        }
    }

    /// Asks until the answer is a non-negative price
    pub fn price(&mut self, label: &str) -> PromptResult<f64> {
        loop {
            if let Some(price) = self.optional_price(label)? {
                return Ok(price);
            }
            self.say("A price is required.")?;
        }
    }

    /// Asks for a non-negative price; a blank answer gives `None`
    pub fn optional_price(&mut self, label: &str) -> PromptResult<Option<f64>> {
        loop {
            let answer = self.line(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => return Ok(Some(price)),
                _ => self.say(&format!("'{}' is not a valid price.", answer))?,
            }
        }
    }

    /// Asks a yes/no question; anything but "y" or "yes" is no
    pub fn confirm(&mut self, label: &str) -> PromptResult<bool> {
        let answer = self.line(label)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
