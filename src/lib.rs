pub mod anonymize;
pub mod error;
pub mod table;

pub use anonymize::{Anonymizer, Decision, HashReport, Salt};
pub use error::TableError;
pub use table::{Cell, Column, Table};
