use std::{
    fmt::{self, Display},
    result,
};

pub type Result<T, E = Error> = result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    Iter(seqiter::Error),
    Json(serde_json::Error),

    InvalidSize {
        size: usize,
    },
    ArgumentMismatch {
        keys: usize,
        values: usize,
    },
    UnsupportedValue {
        kind: &'static str,
        reason: String,
    },
}

impl From<seqiter::Error> for Error {
    fn from(value: seqiter::Error) -> Self {
        Self::Iter(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Iter(error) => Display::fmt(&error, f),
            Error::Json(error) => Display::fmt(&error, f),

            Error::InvalidSize { size } => {
                write!(f, "Invalid size {size}, size must be greater than 0")
            }
            Error::ArgumentMismatch { keys, values } => write!(
                f,
                "Argument mismatch: {keys} keys but {values} values, counts must be equal"
            ),
            Error::UnsupportedValue { kind, reason } => {
                write!(f, "Unsupported value: cannot flatten a JSON {kind} ({reason})")
            }
        }
    }
}

impl std::error::Error for Error {}
