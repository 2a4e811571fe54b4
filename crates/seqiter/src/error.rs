use std::{fmt, result};

use log::debug;

use crate::State;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for seqiter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `current()` was read while the iterator was not positioned on an element.
    InvalidState { state: State },
}

impl Error {
    pub(crate) fn invalid_state(state: State) -> Self {
        debug!("current() called on an iterator in {state} state");
        Self::InvalidState { state }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidState { state } => write!(
                f,
                "Invalid state: no current value while the iterator is {state}"
            ),
        }
    }
}

impl std::error::Error for Error {}
