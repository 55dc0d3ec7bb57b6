use crate::table::{Cell, Table};
use chrono::{Local, NaiveDateTime};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn sha256_hex(input: &str) -> String {
    let mut h = Sha256::new();
    h.update(input.as_bytes());
    hex::encode(h.finalize())
}

/// Per-run salt: hex SHA-256 of a second-precision timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(String);

impl Salt {
    pub fn generate() -> Self {
        Self::from_timestamp(&Local::now().naive_local())
    }

    pub fn from_timestamp(at: &NaiveDateTime) -> Self {
        Salt(sha256_hex(&at.format(TIMESTAMP_FORMAT).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of hashing a selection against a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashReport {
    pub hashed: Vec<String>,
    pub not_found: Vec<String>,
}

pub struct Anonymizer {
    salt: Salt,
}

impl Anonymizer {
    pub fn new(salt: Salt) -> Self {
        Anonymizer { salt }
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn hash_value(&self, value: &str) -> String {
        let mut salted = String::with_capacity(value.len() + self.salt.0.len());
        salted.push_str(value);
        salted.push_str(&self.salt.0);
        sha256_hex(&salted)
    }

    /// Missing stays missing; it is never hashed as an empty string.
    pub fn hash_cell(&self, cell: &Cell) -> Cell {
        match cell {
            Cell::Value(v) => Cell::Value(self.hash_value(v)),
            Cell::Missing(_) => Cell::missing(),
        }
    }

    /// Hashes every selected column in place. Names absent from the table are
    /// reported and skipped; repeated names are hashed once.
    pub fn apply<S: AsRef<str>>(&self, table: &mut Table, selection: &[S]) -> HashReport {
        let mut report = HashReport::default();
        let mut seen = HashSet::new();

        for name in selection.iter().map(AsRef::as_ref) {
            if !seen.insert(name) {
                continue;
            }
            if !table.contains(name) {
                tracing::warn!("Column '{}' not found in the table", name);
                report.not_found.push(name.to_string());
                continue;
            }
            for column in table.columns_mut().iter_mut().filter(|c| c.name == name) {
                for cell in column.values.iter_mut() {
                    *cell = self.hash_cell(cell);
                }
            }
            tracing::debug!("Hashed column '{}'", name);
            report.hashed.push(name.to_string());
        }

        report
    }
}
