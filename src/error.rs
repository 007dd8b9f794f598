use std::array::TryFromSliceError;
use std::io;
use std::num::ParseIntError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ERR - Io: {0}")]
    Io(#[from] io::Error),

    #[error("ERR - Invalid hash: {0}")]
    InvalidHash(String),

    #[error("ERR - Invalid header: {0:?}")]
    InvalidHeader(String),

    #[error("ERR - Invalid tree entry: {0:?}")]
    InvalidTreeEntry(String),

    #[error("ERR - Unexpected end of stream: expected {expected} bytes, read {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    #[error("ERR - Parse: {0}")]
    Parse(#[from] ParseIntError),

    #[error("ERR - TryFromSlice: {0}")]
    TryFromSlice(#[from] TryFromSliceError),

    #[error("ERR - Other: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Other(anyhow::anyhow!("{value}"))
    }
}
