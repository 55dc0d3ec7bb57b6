//! Hash command implementation: load, select, hash, save

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::anonymize::selector::{print_selection, Prompter};
use crate::anonymize::{Anonymizer, HashReport, Salt};
use crate::table::{output_path, TableReader, TableWriter};

pub const PROGRAM: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    /// Explicit selection. `None` means prompt for each column.
    pub columns: Option<Vec<String>>,
    pub delimiter: u8,
}

#[derive(Debug)]
pub struct Summary {
    pub salt: Salt,
    pub output: PathBuf,
    pub rows: usize,
    pub selected: Vec<String>,
    pub report: HashReport,
}

pub fn run(opts: &Options) -> Result<Summary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(opts, Salt::generate(), stdin.lock(), stdout.lock())
}

/// Same as [`run`] with the salt and console passed in.
pub fn run_with<R: BufRead, W: Write>(
    opts: &Options,
    salt: Salt,
    input: R,
    mut out: W,
) -> Result<Summary> {
    writeln!(out, "Using salt: {}", salt)?;
    tracing::debug!("Salt: {}", salt);

    let output = output_path(&opts.input)?;

    tracing::info!("Loading {}", opts.input.display());
    let mut table = TableReader::new(opts.delimiter).open(&opts.input)?;
    tracing::info!(
        "Loaded {} columns, {} rows",
        table.columns().len(),
        table.row_count()
    );

    let selected = match &opts.columns {
        Some(columns) => {
            print_selection(&mut out, &table, columns.as_slice())?;
            columns.clone()
        }
        None => Prompter::new(input, &mut out).select(&table)?,
    };

    let anonymizer = Anonymizer::new(salt);
    let report = anonymizer.apply(&mut table, selected.as_slice());
    for name in &report.not_found {
        writeln!(out, "Column '{}' not found in the table.", name)?;
    }

    tracing::info!("Writing {}", output.display());
    TableWriter::new(opts.delimiter).save(&table, &output)?;

    if opts.columns.is_none() && !selected.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "To repeat this hashing without interactive mode, use the following command:"
        )?;
        writeln!(
            out,
            "{}",
            repeat_command(PROGRAM, &opts.input, opts.delimiter, &selected)
        )?;
    }

    tracing::info!(
        "Hashed {} of {} columns into {}",
        report.hashed.len(),
        table.columns().len(),
        output.display()
    );

    Ok(Summary {
        salt: anonymizer.salt().clone(),
        output,
        rows: table.row_count(),
        selected,
        report,
    })
}

/// Command line that reproduces `columns` without prompting. The salt is not
/// part of it; the next run generates a new one.
pub fn repeat_command(program: &str, input: &Path, delimiter: u8, columns: &[String]) -> String {
    let mut cmd = format!("{} {}", program, quote_if_needed(&input.to_string_lossy()));
    if delimiter != b',' {
        cmd.push_str(" --delimiter ");
        cmd.push_str(&quote_if_needed(&(delimiter as char).to_string()));
    }
    cmd.push_str(" --columns");
    for column in columns {
        cmd.push(' ');
        cmd.push_str(&double_quote(column));
    }
    cmd
}

fn double_quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for ch in arg.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn quote_if_needed(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,+=@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        double_quote(arg)
    }
}
