/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Line-oriented reading shared by the flux and recoil-matrix readers

use std::io::{BufRead, Lines};

use super::errors::{InputError, Result};

/// Line reader with one line of lookahead and line-number tracking
#[derive(Debug)]
pub(crate) struct LineCursor<R> {
    lines: Lines<R>,
    peeked: Option<String>,
    current_line: usize,
    source: String,
}

impl<R: BufRead> LineCursor<R> {
    /// Wrap a reader; `source` names it in error messages
    pub(crate) fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            peeked: None,
            current_line: 0,
            source: source.into(),
        }
    }

    /// Name of the underlying source
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// Number of the last line consumed (1-based)
    pub(crate) fn current_line(&self) -> usize {
        self.current_line
    }

    /// Consume the next line, or `None` at end of input
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        let line = match self.peeked.take() {
            Some(line) => Some(line),
            None => self.lines.next().transpose()?,
        };
        if line.is_some() {
            self.current_line += 1;
        }
        Ok(line)
    }

    /// Look at the next line without consuming it
    pub(crate) fn peek_line(&mut self) -> Result<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = self.lines.next().transpose()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Consume the next line, failing at end of input
    pub(crate) fn expect_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| self.format_error(format!("unexpected end of file, expected {}", what)))
    }

    /// Collect `count` whitespace-separated numbers, spanning as many lines as needed
    pub(crate) fn read_values(&mut self, count: usize, what: &str) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let line = self.expect_line(what)?;
            for token in line.split_whitespace() {
                if values.len() == count {
                    break;
                }
                values.push(self.parse_f64(token)?);
            }
        }
        Ok(values)
    }

    /// Parse a floating-point token; Fortran `D` exponents are accepted
    pub(crate) fn parse_f64(&self, token: &str) -> Result<f64> {
        token
            .replace(['D', 'd'], "E")
            .parse::<f64>()
            .map_err(|_| self.parse_error(format!("invalid number '{}'", token)))
    }

    /// Parse an integer token
    pub(crate) fn parse_int<T: std::str::FromStr>(&self, token: &str) -> Result<T> {
        token
            .trim()
            .parse::<T>()
            .map_err(|_| self.parse_error(format!("invalid integer '{}'", token)))
    }

    /// Format error located at the current line
    pub(crate) fn format_error(&self, message: impl AsRef<str>) -> InputError {
        InputError::InvalidFormat(format!(
            "{}:{}: {}",
            self.source,
            self.current_line,
            message.as_ref()
        ))
    }

    /// Parse error located at the current line
    pub(crate) fn parse_error(&self, message: impl AsRef<str>) -> InputError {
        InputError::ParseError(format!(
            "{}:{}: {}",
            self.source,
            self.current_line,
            message.as_ref()
        ))
    }
}
