// src/resolve.rs
//
// Ward and party cell resolution. Ward text always resolves (worst case
// is an at-large seat); party text must be a single token and, later at
// assembly, a member of the term's party set.

use std::fmt;

use crate::core::sanitize::tokenize;
use crate::errors::PartyError;

pub const LIST_MARKER: &str = "Landesliste";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ward {
    /// Canonical ward label, e.g. "Gütersloh III".
    District(String),
    /// Seat gained via party list; no district.
    AtLarge,
}

impl Ward {
    pub fn is_at_large(&self) -> bool {
        matches!(self, Ward::AtLarge)
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ward::District(label) => f.write_str(label),
            Ward::AtLarge => f.write_str(LIST_MARKER),
        }
    }
}

/// Normalize ward text. A leading list marker is dropped; whatever
/// remains (if anything) is the canonical label.
pub fn resolve_ward(text: &str) -> Ward {
    let words = tokenize(text);
    let mut words = words.as_slice();
    if words.is_empty() {
        return Ward::AtLarge;
    }
    if words[0] == LIST_MARKER {
        words = &words[1..];
        if words.is_empty() {
            return Ward::AtLarge;
        }
    }
    Ward::District(words.join(" "))
}

/// The party cell must normalize to exactly one token; free text in the
/// party column is not a party.
pub fn resolve_party(text: &str) -> Result<String, PartyError> {
    let words = tokenize(text);
    match words.as_slice() {
        [] => Err(PartyError::Empty),
        [one] => Ok(one.clone()),
        _ => Err(PartyError::NotASingleToken),
    }
}

/// Parties with seats, per legislative term.
pub fn parties_for_term(term: u8) -> Option<&'static [&'static str]> {
    match term {
        14 => Some(&["CDU", "SPD", "FDP", "Grüne", "Fraktionslos"]),
        15 => Some(&["CDU", "SPD", "FDP", "Grüne", "Linke"]),
        16 => Some(&["CDU", "SPD", "FDP", "GRÜNE", "PIRATEN"]),
        17 => Some(&["CDU", "SPD", "FDP", "GRÜNE", "AfD", "fraktionslos"]),
        _ => None,
    }
}
