//! Salting, column selection and hashing

pub mod anonymizer;
pub mod main;
pub mod selector;

pub use anonymizer::{Anonymizer, HashReport, Salt};
pub use main::{repeat_command, run, run_with, Options, Summary};
pub use selector::{sample_value, Decision, Prompter, EMPTY_SAMPLE};
