// src/record.rs
//
// The output record and its assembly step. A record either carries every
// required field or it is never constructed; the assembler turns the
// resolvers' partial answers into exactly that all-or-nothing decision.

use std::fmt;

use crate::config::consts::{TERM_MAX, TERM_MIN};
use crate::core::sanitize::normalize_ws;
use crate::errors::RecordError;
use crate::names::NameParts;
use crate::resolve::Ward;

/// Stable column shape used by the CSV store and exports.
pub const HEADERS: [&str; 12] = [
    "Legislature",
    "First name",
    "Middle name 1",
    "Middle name 2",
    "Last name",
    "Preposition",
    "Peer title",
    "Academic title",
    "Party",
    "Ward",
    "Ward no",
    "Voters",
];

/// One member of the state parliament, for one legislative term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mdl {
    pub legislature: u8,
    pub name: NameParts,
    pub academic_title: Option<String>,
    pub ward: Ward,
    pub party: String,
    /// Filled by the optional ward-detail pass.
    pub ward_no: Option<u32>,
    pub voter_count: Option<u32>,
}

impl Mdl {
    pub fn new(
        legislature: u8,
        mut name: NameParts,
        ward: Ward,
        party: String,
    ) -> Result<Self, RecordError> {
        if !(TERM_MIN..=TERM_MAX).contains(&legislature) {
            return Err(RecordError::TermOutOfRange(legislature));
        }
        let academic_title = take_academic_title(&mut name);
        Ok(Self {
            legislature,
            name,
            academic_title,
            ward,
            party,
            ward_no: None,
            voter_count: None,
        })
    }

    /// Store key: `last_first_ward_legislature`.
    pub fn key(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.name.last_name, self.name.first_name, self.ward, self.legislature
        )
    }

    pub fn to_row(&self) -> Vec<String> {
        let opt = |o: &Option<String>| o.clone().unwrap_or_default();
        vec![
            self.legislature.to_string(),
            self.name.first_name.clone(),
            opt(&self.name.middle_name_1),
            opt(&self.name.middle_name_2),
            self.name.last_name.clone(),
            opt(&self.name.preposition),
            opt(&self.name.peer_title),
            opt(&self.academic_title),
            self.party.clone(),
            self.ward.to_string(),
            self.ward_no.map(|n| n.to_string()).unwrap_or_default(),
            self.voter_count.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }

    pub fn from_row(row: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        if row.len() < HEADERS.len() {
            return Err(format!("record row has {} of {} columns", row.len(), HEADERS.len()).into());
        }
        let opt = |s: &String| if s.is_empty() { None } else { Some(s.clone()) };
        let legislature: u8 = row[0].parse()?;
        if !(TERM_MIN..=TERM_MAX).contains(&legislature) {
            return Err(RecordError::TermOutOfRange(legislature).into());
        }
        Ok(Self {
            legislature,
            name: NameParts {
                first_name: row[1].clone(),
                middle_name_1: opt(&row[2]),
                middle_name_2: opt(&row[3]),
                last_name: row[4].clone(),
                preposition: opt(&row[5]),
                peer_title: opt(&row[6]),
            },
            academic_title: opt(&row[7]),
            ward: crate::resolve::resolve_ward(&row[9]),
            party: row[8].clone(),
            ward_no: opt(&row[10]).map(|s| s.parse()).transpose()?,
            voter_count: opt(&row[11]).map(|s| s.parse()).transpose()?,
        })
    }
}

impl fmt::Display for Mdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MdL {}", self.key())?;
        let title = match &self.academic_title {
            Some(t) => format!("{t} "),
            None => s!(),
        };
        writeln!(f, "  {}{}", title, self.name.full())?;
        writeln!(f, "  party={}", self.party)?;
        write!(f, "  ward={}", self.ward)?;
        if let Some(no) = self.ward_no {
            write!(f, " (no. {no})")?;
        }
        if let Some(v) = self.voter_count {
            write!(f, ", {v} eligible voters")?;
        }
        Ok(())
    }
}

/// Row assembly: every raw field must have resolved and the party must
/// belong to the term's set. Anything less skips the row — partial
/// records never reach the output sequence.
pub fn assemble(
    legislature: u8,
    parties: &[&str],
    name: Option<NameParts>,
    ward: Option<Ward>,
    party: Option<String>,
) -> Option<Mdl> {
    let name = name?;
    let ward = ward?;
    let party = party?;
    if !parties.contains(&party.as_str()) {
        return None;
    }
    Mdl::new(legislature, name, ward, party).ok()
}

/// Academic titles ride through the decomposer in the peer-title slot;
/// at assembly they move to their own field, re-dotted.
fn take_academic_title(name: &mut NameParts) -> Option<String> {
    let is_academic = name
        .peer_title
        .as_deref()
        .is_some_and(|t| t.starts_with("Dr") || t.starts_with("Prof"));
    if !is_academic {
        return None;
    }
    name.peer_title.take().map(|t| normalize_academic_title(&t))
}

/// The tokenizer eats the dots of academic titles; put them back.
/// "Prof.Dr" → "Prof. Dr.", "Dr" → "Dr.".
pub fn normalize_academic_title(raw: &str) -> String {
    let mut title = s!(raw);
    if title.contains(".D") {
        title = title.split('.').collect::<Vec<_>>().join(". ");
    }
    if title.ends_with("Dr") || title.ends_with("Prof") {
        title.push('.');
    }
    normalize_ws(&title)
}
