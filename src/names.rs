// src/names.rs
//
// Turns a short run of name tokens into typed fields. The rules are a
// priority cascade distilled from the table layouts actually observed,
// not a grammar: the first matching rule wins, nothing backtracks, and
// a run no rule claims is a hard failure — guessing a wrong surname is
// worse than dropping the row.

use crate::errors::DecomposeError;
use crate::gazetteer::{Gazetteer, hyphen_suffix_is_preposition, is_preposition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameParts {
    pub first_name: String,
    pub middle_name_1: Option<String>,
    pub middle_name_2: Option<String>,
    pub last_name: String,
    pub preposition: Option<String>,
    pub peer_title: Option<String>,
}

impl NameParts {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first_name: first.into(),
            middle_name_1: None,
            middle_name_2: None,
            last_name: last.into(),
            preposition: None,
            peer_title: None,
        }
    }

    /// Display order: title, given names, particle, surname.
    pub fn full(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(t) = &self.peer_title {
            parts.push(t);
        }
        parts.push(&self.first_name);
        if let Some(m) = &self.middle_name_1 {
            parts.push(m);
        }
        if let Some(m) = &self.middle_name_2 {
            parts.push(m);
        }
        if let Some(p) = &self.preposition {
            parts.push(p);
        }
        parts.push(&self.last_name);
        parts.join(" ")
    }
}

/// Decompose a normalized 2–4 token run. Longer or shorter runs never
/// reach this point from a plausible name column and are rejected.
pub fn decompose(words: &[String], gaz: &Gazetteer) -> Result<NameParts, DecomposeError> {
    match words {
        [a, b] => two_tokens(a, b, gaz),
        [a, b, c] => Ok(three_tokens(a, b, c, gaz)),
        [a, b, c, d] => four_tokens(a, b, c, d, gaz),
        _ => Err(DecomposeError::UnsupportedLength(words.len())),
    }
}

fn two_tokens(a: &str, b: &str, gaz: &Gazetteer) -> Result<NameParts, DecomposeError> {
    if gaz.is_first_name(a) {
        Ok(NameParts::new(a, b))
    } else {
        Err(DecomposeError::NotAFirstName(s!(a)))
    }
}

/// Three tokens always resolve; the final rule treats the tail as a
/// compound surname.
fn three_tokens(a: &str, b: &str, c: &str, gaz: &Gazetteer) -> NameParts {
    // 1. two known given names
    if gaz.is_first_name(a) && gaz.is_first_name(b) {
        let mut n = NameParts::new(a, c);
        n.middle_name_1 = Some(s!(b));
        return n;
    }
    // 2. particle in the middle
    if is_preposition(b) {
        let mut n = NameParts::new(a, c);
        n.preposition = Some(s!(b));
        return n;
    }
    // 3. leading title
    if gaz.is_peer_title(a) {
        let mut n = NameParts::new(b, c);
        n.peer_title = Some(s!(a));
        return n;
    }
    // 4. title between given name and surname
    if gaz.is_peer_title(b) {
        let mut n = NameParts::new(a, c);
        n.peer_title = Some(s!(b));
        return n;
    }
    // 5./6. the remaining tokens form a compound surname, whether the
    //    middle one is a particle-suffixed hyphen half ("Meyer-von
    //    Bülow") or a plain double surname
    NameParts::new(a, format!("{b} {c}"))
}

/// Four tokens: the leading token (stage A) and the remainder (stage B)
/// are decided separately; stage B may override stage A's title. A run
/// that leaves either required field unset is a failure, never a guess.
fn four_tokens(
    a: &str,
    b: &str,
    c: &str,
    d: &str,
    gaz: &Gazetteer,
) -> Result<NameParts, DecomposeError> {
    let mut first: Option<String> = None;
    let mut middle_1: Option<String> = None;
    let mut middle_2: Option<String> = None;
    let mut last: Option<String> = None;
    let mut preposition: Option<String> = None;
    let mut peer_title: Option<String> = None;

    // Stage A
    if gaz.is_first_name(a) {
        first = Some(s!(a));
    } else if gaz.is_peer_title(a) {
        peer_title = Some(s!(a));
        if gaz.is_first_name(b) {
            first = Some(s!(b));
        }
    }

    // Stage B
    if gaz.is_peer_title(b) {
        peer_title = Some(s!(b));
        if is_preposition(c) {
            preposition = Some(s!(c));
            last = Some(s!(d));
        } else {
            last = Some(format!("{c} {d}"));
        }
    } else if gaz.is_first_name(b) {
        middle_1 = Some(s!(b));
        if gaz.is_first_name(c) {
            middle_2 = Some(s!(c));
            last = Some(s!(d));
        } else if is_preposition(c) {
            preposition = Some(s!(c));
            last = Some(s!(d));
        } else {
            last = Some(format!("{c} {d}"));
        }
    } else if is_preposition(b) {
        if is_preposition(c) {
            // double particle: "von der"
            preposition = Some(format!("{b} {c}"));
            last = Some(s!(d));
        } else if hyphen_suffix_is_preposition(c) {
            last = Some(format!("{c} {d}"));
        } else {
            preposition = Some(s!(b));
            last = Some(format!("{c} {d}"));
        }
    } else if is_preposition(c) {
        preposition = Some(s!(c));
        last = Some(s!(d));
    }

    match (first, last) {
        (Some(first_name), Some(last_name)) => Ok(NameParts {
            first_name,
            middle_name_1: middle_1,
            middle_name_2: middle_2,
            last_name,
            preposition,
            peer_title,
        }),
        _ => Err(DecomposeError::NoRule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::test_gazetteer;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| s!(*w)).collect()
    }

    fn ok(items: &[&str]) -> NameParts {
        decompose(&words(items), &test_gazetteer()).unwrap()
    }

    #[test]
    fn two_tokens_require_a_known_first_name() {
        let n = ok(&["Anna", "Schmidt"]);
        assert_eq!(n, NameParts::new("Anna", "Schmidt"));

        let err = decompose(&words(&["Schmidt", "Anna"]), &test_gazetteer());
        assert_eq!(err, Err(DecomposeError::NotAFirstName(s!("Schmidt"))));
    }

    #[test]
    fn hyphenated_first_name_counts() {
        let n = ok(&["Hans-Dieter", "Schwartz"]);
        assert_eq!(n.first_name, "Hans-Dieter");
        assert_eq!(n.last_name, "Schwartz");
    }

    #[test]
    fn three_tokens_two_given_names() {
        let n = ok(&["Anna", "Maria", "Schmidt"]);
        assert_eq!(n.first_name, "Anna");
        assert_eq!(n.middle_name_1.as_deref(), Some("Maria"));
        assert_eq!(n.last_name, "Schmidt");
        assert_eq!(n.peer_title, None);
    }

    #[test]
    fn three_tokens_middle_particle() {
        let n = ok(&["Hans", "von", "Heide"]);
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn three_tokens_leading_title() {
        let n = ok(&["Graf", "Hans", "Lambsdorff"]);
        assert_eq!(n.peer_title.as_deref(), Some("Graf"));
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.last_name, "Lambsdorff");
    }

    #[test]
    fn three_tokens_embedded_title() {
        let n = ok(&["Otto", "Graf", "Lambsdorff"]);
        assert_eq!(n.first_name, "Otto");
        assert_eq!(n.peer_title.as_deref(), Some("Graf"));
        assert_eq!(n.last_name, "Lambsdorff");
    }

    #[test]
    fn three_tokens_hyphen_particle_compound_surname() {
        let n = ok(&["Anna", "Meyer-von", "Bülow"]);
        assert_eq!(n.first_name, "Anna");
        assert_eq!(n.last_name, "Meyer-von Bülow");
        assert_eq!(n.preposition, None);
    }

    #[test]
    fn three_tokens_fallback_compound_surname() {
        let n = ok(&["Anna", "Meyer", "Bülow"]);
        assert_eq!(n.first_name, "Anna");
        assert_eq!(n.last_name, "Meyer Bülow");
    }

    #[test]
    fn four_tokens_double_given_name() {
        let n = ok(&["Anna", "Maria", "Ute", "Schmidt"]);
        assert_eq!(n.first_name, "Anna");
        assert_eq!(n.middle_name_1.as_deref(), Some("Maria"));
        assert_eq!(n.middle_name_2.as_deref(), Some("Ute"));
        assert_eq!(n.last_name, "Schmidt");
    }

    #[test]
    fn four_tokens_middle_name_then_particle() {
        let n = ok(&["Anna", "Maria", "von", "Heide"]);
        assert_eq!(n.middle_name_1.as_deref(), Some("Maria"));
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn four_tokens_title_then_particle() {
        let n = ok(&["Hans", "Freiherr", "von", "Heide"]);
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.peer_title.as_deref(), Some("Freiherr"));
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn four_tokens_double_particle() {
        let n = ok(&["Hans", "von", "der", "Heide"]);
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.preposition.as_deref(), Some("von der"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn four_tokens_particle_then_hyphen_particle_compound() {
        let n = ok(&["Hans", "von", "Meyer-zu", "Bülow"]);
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.preposition, None);
        assert_eq!(n.last_name, "Meyer-zu Bülow");
    }

    #[test]
    fn four_tokens_particle_then_plain_compound() {
        let n = ok(&["Hans", "von", "Meyer", "Bülow"]);
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Meyer Bülow");
    }

    #[test]
    fn four_tokens_late_particle() {
        let n = ok(&["Hans", "Schulte", "von", "Heide"]);
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn four_tokens_title_leading_with_given_name() {
        // stage A takes the title and the given name; stage B re-reads
        // the given name as a middle name, as the layouts do
        let n = ok(&["Freiherr", "Hans", "von", "Heide"]);
        assert_eq!(n.peer_title.as_deref(), Some("Freiherr"));
        assert_eq!(n.first_name, "Hans");
        assert_eq!(n.middle_name_1.as_deref(), Some("Hans"));
        assert_eq!(n.preposition.as_deref(), Some("von"));
        assert_eq!(n.last_name, "Heide");
    }

    #[test]
    fn four_tokens_without_any_match_fail() {
        let err = decompose(&words(&["Xavier", "Schulte", "Meyer", "Heide"]), &test_gazetteer());
        assert_eq!(err, Err(DecomposeError::NoRule));
    }

    #[test]
    fn four_tokens_unknown_leading_token_fails_without_first_name() {
        // stage B resolves a surname but stage A found no given name
        let err = decompose(&words(&["Xavier", "Maria", "von", "Heide"]), &test_gazetteer());
        assert_eq!(err, Err(DecomposeError::NoRule));
    }

    #[test]
    fn out_of_range_lengths_fail() {
        let g = test_gazetteer();
        assert_eq!(
            decompose(&words(&["Anna"]), &g),
            Err(DecomposeError::UnsupportedLength(1))
        );
        assert_eq!(
            decompose(&words(&["Anna", "b", "c", "d", "e"]), &g),
            Err(DecomposeError::UnsupportedLength(5))
        );
    }

    #[test]
    fn full_renders_in_display_order() {
        let n = ok(&["Hans", "Freiherr", "von", "Heide"]);
        assert_eq!(n.full(), "Freiherr Hans von Heide");
    }
}
