//! Operator input
//!
//! Every field is read as one line and parsed into an explicit
//! [`ParseOutcome`]. Bad input never leaves a field half-set: the prompt
//! repeats until the value parses or input ends.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::Result;
use crate::model::Price;

/// Result of parsing one line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Value(T),
    /// Line was blank
    Empty,
    /// Line did not parse; carries the offending text
    Invalid(String),
}

impl<T> ParseOutcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            ParseOutcome::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Parse a trimmed line with `T::from_str`
pub fn parse_field<T: FromStr>(raw: &str) -> ParseOutcome<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParseOutcome::Empty;
    }
    match trimmed.parse() {
        Ok(v) => ParseOutcome::Value(v),
        Err(_) => ParseOutcome::Invalid(trimmed.to_string()),
    }
}

/// Parse an order quantity: a whole number of at least one
pub fn parse_quantity(raw: &str) -> ParseOutcome<u32> {
    match parse_field::<u32>(raw) {
        ParseOutcome::Value(0) => ParseOutcome::Invalid("0".to_string()),
        other => other,
    }
}

/// Line-oriented prompts over any reader/writer pair
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line.
    /// Returns `Ok(None)` once input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Free text field (may be empty)
    pub fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt_line(prompt)
    }

    /// Any integer, re-prompting on bad input
    pub fn prompt_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        self.prompt_until(prompt, parse_field, "Invalid number, try again.")
    }

    /// A non-negative whole number, re-prompting on bad input
    pub fn prompt_count(&mut self, prompt: &str) -> Result<Option<u32>> {
        self.prompt_until(
            prompt,
            parse_field,
            "Please enter a whole number of 0 or more.",
        )
    }

    /// A quantity of at least one, re-prompting on bad input
    pub fn prompt_quantity(&mut self, prompt: &str) -> Result<Option<u32>> {
        self.prompt_until(
            prompt,
            parse_quantity,
            "Please enter a whole number of at least 1.",
        )
    }

    /// A non-negative price, re-prompting on bad input
    pub fn prompt_price(&mut self, prompt: &str) -> Result<Option<Price>> {
        self.prompt_until(prompt, parse_field, "Invalid price, try again.")
    }

    fn prompt_until<T, F>(&mut self, prompt: &str, parse: F, retry: &str) -> Result<Option<T>>
    where
        F: Fn(&str) -> ParseOutcome<T>,
    {
        loop {
            let line = match self.prompt_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse(&line) {
                ParseOutcome::Value(v) => return Ok(Some(v)),
                ParseOutcome::Empty | ParseOutcome::Invalid(_) => {
                    writeln!(self.output, "{}", retry)?;
                }
            }
        }
    }

    /// Write text as-is
    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text followed by a newline
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Hand back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
