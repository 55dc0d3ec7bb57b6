use crate::error::TableError;
use crate::table::Table;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker prefixed to the input's base name to name the output file.
pub const OUTPUT_PREFIX: &str = "hashed_";

/// `dir/name.csv` becomes `dir/hashed_name.csv`.
pub fn output_path(input: &Path) -> Result<PathBuf, TableError> {
    let name = input
        .file_name()
        .ok_or_else(|| TableError::OutputPath(input.to_path_buf()))?;

    let mut prefixed = std::ffi::OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    Ok(input.with_file_name(prefixed))
}

pub struct TableWriter {
    delimiter: u8,
}

impl TableWriter {
    pub fn new(delimiter: u8) -> Self {
        TableWriter { delimiter }
    }

    /// Writes header and rows to `path`, replacing whatever is there.
    pub fn save(&self, table: &Table, path: &Path) -> Result<(), TableError> {
        let file = File::create(path).map_err(|e| TableError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        self.write(table, file, path)
    }

    pub fn write<W: Write>(&self, table: &Table, sink: W, origin: &Path) -> Result<(), TableError> {
        let write_err = |source: csv::Error| TableError::Write {
            path: origin.to_path_buf(),
            source,
        };

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(sink);

        wtr.write_record(table.column_names()).map_err(write_err)?;
        for i in 0..table.row_count() {
            wtr.write_record(table.row(i).map(|c| c.as_field()))
                .map_err(write_err)?;
        }
        wtr.flush().map_err(|e| write_err(e.into()))?;

        tracing::debug!("Wrote {} rows to {}", table.row_count(), origin.display());
        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new(b',')
    }
}
