// src/errors.rs
use std::io;

use thiserror::Error;

/// Fatal at startup: without its lookup sets the engine cannot classify
/// a single token.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("gazetteer file '{path}' is unreadable: {source}")]
    Unreadable { path: String, source: io::Error },
    #[error("gazetteer set '{0}' is empty")]
    Empty(&'static str),
}

/// A name-cell token run that matched no decomposition rule. The owning
/// row is skipped; extraction continues with the next row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecomposeError {
    #[error("name runs are 2 to 4 tokens, got {0}")]
    UnsupportedLength(usize),
    #[error("'{0}' is not a known first name")]
    NotAFirstName(String),
    #[error("token run matched no decomposition rule")]
    NoRule,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    #[error("party cell is empty")]
    Empty,
    #[error("party cell holds more than one token")]
    NotASingleToken,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("legislature {0} out of range")]
    TermOutOfRange(u8),
}
