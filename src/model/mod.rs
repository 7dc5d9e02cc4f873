//! Module defining the data model of a job posting.

pub mod constants;
mod types;

pub use self::types::*;
