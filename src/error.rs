use nom::error::{ErrorKind, ParseError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of bounds for catalog of {len} records")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

/// Failure while reading a persisted catalog back.
///
/// Doubles as the nom error type of both decoders, so combinators
/// can return it directly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    #[error("truncated data: `{field}` needs {needed} bytes, {available} left")]
    Truncated {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("corrupt data: `{field}` length {len} does not fit in memory")]
    LengthOverflow { field: &'static str, len: u64 },

    #[error("corrupt data: `{field}` is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("incomplete record: input ends before `{field}`")]
    IncompleteRecord { field: &'static str },

    #[error("corrupt data: `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("malformed input: {0:?}")]
    Malformed(ErrorKind),
}

impl<I> ParseError<I> for DecodeError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        DecodeError::Malformed(kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Unwraps a nom result error into the decode error it carries.
pub(crate) fn from_nom(err: nom::Err<DecodeError>) -> DecodeError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        // complete parsers never ask for more input
        nom::Err::Incomplete(_) => DecodeError::Malformed(ErrorKind::Eof),
    }
}
