//! In-memory table model plus CSV load and save

pub mod reader;
pub mod writer;

pub use reader::TableReader;
pub use writer::{output_path, TableWriter, OUTPUT_PREFIX};

/// A single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Missing marker. Keeps the source text (empty or an NA token) so
    /// untouched columns are written back verbatim.
    Missing(String),
    Value(String),
}

impl Cell {
    /// Classifies raw field text.
    pub fn parse(field: &str) -> Self {
        if is_missing(field) {
            Cell::Missing(field.to_string())
        } else {
            Cell::Value(field.to_string())
        }
    }

    pub fn missing() -> Self {
        Cell::Missing(String::new())
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Cell::Value(v) => Some(v),
            Cell::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing(_))
    }

    /// Text written on save.
    pub fn as_field(&self) -> &str {
        match self {
            Cell::Value(v) | Cell::Missing(v) => v,
        }
    }
}

/// Field texts treated as missing on load, in addition to the empty field.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(field: &str) -> bool {
    field.is_empty() || NA_VALUES.contains(&field)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Cell>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// First non-missing value, scanning top to bottom.
    pub fn first_present(&self) -> Option<&str> {
        self.values.iter().find_map(Cell::value)
    }
}

/// Column-major table. Every column holds the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Short columns are padded with missing cells.
    pub fn new(mut columns: Vec<Column>) -> Self {
        let rows = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
        for column in &mut columns {
            column.values.resize(rows, Cell::missing());
        }
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.columns.iter().map(move |c| &c.values[index])
    }
}
