//! Column selection, either explicit or by prompting per column

use crate::table::{Column, Table};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Shown in place of a sample when every value in the column is missing.
pub const EMPTY_SAMPLE: &str = "<empty>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hash,
    Skip,
    /// Skip this column and every column after it.
    Stop,
}

impl Decision {
    /// Case-insensitive; an empty answer means `Skip`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "Y" => Some(Decision::Hash),
            "N" | "" => Some(Decision::Skip),
            "S" => Some(Decision::Stop),
            _ => None,
        }
    }
}

pub fn sample_value(column: &Column) -> &str {
    column.first_present().unwrap_or(EMPTY_SAMPLE)
}

/// Prints the explicit-mode listing: every table column, marking the ones
/// that will be hashed.
pub fn print_selection<W: Write, S: AsRef<str>>(
    out: &mut W,
    table: &Table,
    selection: &[S],
) -> Result<()> {
    writeln!(out, "Found columns in the table:")?;
    for name in table.column_names() {
        if selection.iter().any(|s| s.as_ref() == name) {
            writeln!(out, "  * {} (will be hashed)", name)?;
        } else {
            writeln!(out, "  - {}", name)?;
        }
    }
    Ok(())
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Asks about `column` until a valid answer arrives. End of input counts
    /// as `Stop`.
    pub fn ask(&mut self, column: &Column) -> Result<Decision> {
        loop {
            write!(
                self.output,
                "Column: {}, sample value: {}. Hash this column? [Y/N/S]: ",
                column.name,
                sample_value(column)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                tracing::warn!("Input closed while prompting for '{}', stopping selection", column.name);
                return Ok(Decision::Stop);
            }

            match Decision::parse(&line) {
                Some(decision) => return Ok(decision),
                None => writeln!(
                    self.output,
                    "Invalid input. Please enter Y, N, or S (case-insensitive)."
                )?,
            }
        }
    }

    /// Walks the columns in table order and returns the names chosen for
    /// hashing.
    pub fn select(&mut self, table: &Table) -> Result<Vec<String>> {
        writeln!(
            self.output,
            "For each column, decide whether to hash it (Y/N) or skip the rest (S). Default is N."
        )?;

        let mut selected = Vec::new();
        for column in table.columns() {
            match self.ask(column)? {
                Decision::Hash => selected.push(column.name.clone()),
                Decision::Skip => {}
                Decision::Stop => {
                    tracing::debug!("Selection stopped at column '{}'", column.name);
                    break;
                }
            }
        }
        Ok(selected)
    }
}
