// src/gazetteer.rs
//
// The three lookup sets every classification question is answered
// against, plus the static particle lists. Loaded once, read-only for
// the rest of the run; constructed explicitly and passed by reference
// so tests can run on synthetic sets.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::consts::{CITIES_FILE, FIRST_NAMES_FILE, GAZETTEER_DIR, PEER_TITLES_FILE};
use crate::errors::GazetteerError;

/// Nobiliary particles that may occur inside a surname.
pub const PREPOSITIONS: [&str; 9] =
    ["von", "van", "de", "auf", "der", "und", "zu", "den", "dos"];

/// The subset that closes a hyphenated surname half ("Meyer-von Bülow").
const COMPOUND_SUFFIXES: [&str; 4] = ["von", "van", "de", "zu"];

pub struct Gazetteer {
    first_names: HashSet<String>,
    cities: HashSet<String>,
    peer_titles: HashSet<String>,
}

impl Gazetteer {
    /// Build from already-materialized sets. Any empty set is refused:
    /// an engine that cannot classify would silently skip every row.
    pub fn from_sets(
        first_names: HashSet<String>,
        cities: HashSet<String>,
        peer_titles: HashSet<String>,
    ) -> Result<Self, GazetteerError> {
        if first_names.is_empty() {
            return Err(GazetteerError::Empty("first names"));
        }
        if cities.is_empty() {
            return Err(GazetteerError::Empty("cities"));
        }
        if peer_titles.is_empty() {
            return Err(GazetteerError::Empty("peer titles"));
        }
        Ok(Self { first_names, cities, peer_titles })
    }

    /// Load the three sets from one-entry-per-line files under `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, GazetteerError> {
        Self::from_sets(
            read_set(dir, FIRST_NAMES_FILE)?,
            read_set(dir, CITIES_FILE)?,
            read_set(dir, PEER_TITLES_FILE)?,
        )
    }

    pub fn load() -> Result<Self, GazetteerError> {
        Self::load_from(Path::new(GAZETTEER_DIR))
    }

    /// Direct match, or either half of a hyphenated given name
    /// ("Hans-Peter", "Karl-Josef").
    pub fn is_first_name(&self, word: &str) -> bool {
        if self.first_names.contains(word) {
            return true;
        }
        if let Some(i) = word.find('-') {
            if self.first_names.contains(&word[..i]) {
                return true;
            }
        }
        if let Some(i) = word.rfind('-') {
            if self.first_names.contains(&word[i + 1..]) {
                return true;
            }
        }
        false
    }

    /// Direct match, or any part of a 2- or 3-part hyphen compound
    /// ("Castrop-Rauxel", "Kamp-Lintfort").
    pub fn is_city(&self, word: &str) -> bool {
        if self.cities.contains(word) {
            return true;
        }
        let parts: Vec<&str> = word.split('-').collect();
        if (2..=3).contains(&parts.len()) {
            return parts.iter().any(|p| self.cities.contains(*p));
        }
        false
    }

    /// Titles are proper nouns; membership is exact and case-sensitive.
    pub fn is_peer_title(&self, word: &str) -> bool {
        self.peer_titles.contains(word)
    }
}

fn read_set(dir: &Path, file: &str) -> Result<HashSet<String>, GazetteerError> {
    let path = dir.join(file);
    let text = fs::read_to_string(&path).map_err(|source| GazetteerError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| s!(l))
        .collect())
}

/// "Kreis" compounds are administrative districts even when the city
/// gazetteer does not know them ("Rhein-Sieg-Kreis", "Märkischer Kreis").
pub fn is_kreis(text: &str) -> bool {
    text.contains("Kreis") || text.contains("kreis")
}

pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}

/// True for hyphenated words whose tail is a particle ("Meyer-von").
pub fn hyphen_suffix_is_preposition(word: &str) -> bool {
    match word.rsplit_once('-') {
        Some((_, tail)) => COMPOUND_SUFFIXES.contains(&tail),
        None => false,
    }
}

/// Small synthetic gazetteer shared by the unit tests.
#[cfg(test)]
pub(crate) fn test_gazetteer() -> Gazetteer {
    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| s!(*w)).collect()
    }
    Gazetteer::from_sets(
        set(&["Anna", "Hans", "Peter", "Karl", "Maria", "Georg", "Ute"]),
        set(&["Köln", "Aachen", "Gütersloh", "Soest", "Castrop", "Rauxel"]),
        set(&["Freiherr", "Freifrau", "Graf", "Gräfin", "Dr", "Prof"]),
    )
    .unwrap()
}
