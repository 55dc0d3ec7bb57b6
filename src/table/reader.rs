use crate::error::TableError;
use crate::table::{Cell, Column, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct TableReader {
    delimiter: u8,
}

impl TableReader {
    pub fn new(delimiter: u8) -> Self {
        TableReader { delimiter }
    }

    /// Loads the whole file into memory. The first record is the header.
    pub fn open(&self, path: &Path) -> Result<Table, TableError> {
        let file = File::open(path).map_err(|e| TableError::Read {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        self.read(file, path)
    }

    /// `origin` is only used in error messages.
    pub fn read<R: Read>(&self, source: R, origin: &Path) -> Result<Table, TableError> {
        let read_err = |source: csv::Error| TableError::Read {
            path: origin.to_path_buf(),
            source,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(source);

        let mut records = rdr.records();
        let header = match records.next() {
            Some(rec) => rec.map_err(read_err)?,
            None => {
                return Err(TableError::NoHeader {
                    path: origin.to_path_buf(),
                })
            }
        };

        let mut columns: Vec<Column> = header
            .iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();
        let width = columns.len();

        for (idx, rec) in records.enumerate() {
            let rec = rec.map_err(read_err)?;
            if rec.len() > width {
                return Err(TableError::RaggedRow {
                    path: origin.to_path_buf(),
                    row: idx + 1,
                    found: rec.len(),
                    expected: width,
                });
            }
            for (i, column) in columns.iter_mut().enumerate() {
                let cell = rec.get(i).map(Cell::parse).unwrap_or_else(Cell::missing);
                column.values.push(cell);
            }
        }

        let table = Table::new(columns);
        tracing::debug!(
            "Loaded {}: {} columns, {} rows",
            origin.display(),
            width,
            table.row_count()
        );
        Ok(table)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new(b',')
    }
}
