//! Interactive prompt for values missing from the command line
//!
//! Values are read as whitespace-separated tokens, so several answers may
//! share a line (`3 2024`) or be spread over several lines.

use crate::types::ConsolidationError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads answers from `input`, writing prompts to `output`
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Output shared by prompts and session results
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> Result<(), ConsolidationError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next whitespace-separated token
    ///
    /// # Errors
    ///
    /// `ConsolidationError::MissingInput` when the input ends first.
    pub fn next_token(&mut self, field: &str) -> Result<String, ConsolidationError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsolidationError::missing_input(field));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| ConsolidationError::missing_input(field))
    }

    /// Next token parsed as `T`
    ///
    /// # Errors
    ///
    /// `ConsolidationError::InvalidInput` when the token does not parse.
    pub fn next_value<T: FromStr>(&mut self, field: &str) -> Result<T, ConsolidationError> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| ConsolidationError::invalid_input(field, &token))
    }

    /// Use `value` if present, otherwise read the next token
    pub fn value_or_ask<T: FromStr>(
        &mut self,
        value: Option<T>,
        field: &str,
    ) -> Result<T, ConsolidationError> {
        match value {
            Some(value) => Ok(value),
            None => self.next_value(field),
        }
    }
}
