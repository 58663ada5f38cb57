//! Error types in Stratus
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid class column: {0}")]
    ClassColumn(String),
    #[error("row {row} has {found} values but the table declares {expected} features")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {0} has an empty class label")]
    MissingLabel(usize),
    #[error("unknown feature {0:?}")]
    UnknownFeature(String),
}
