use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Cannot draw values from an empty range (--max must be at least 1)")]
    EmptyRange,

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
