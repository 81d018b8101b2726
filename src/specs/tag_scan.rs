// src/specs/tag_scan.rs
//
// Middle table generation: no stable column indices. Every link and
// span fragment in a row is inspected on its own; content decides
// whether it is a name run, a city ward or a "Kreis" district. A name
// candidate is only accepted while the running cell counter is still
// below NAME_CELL_LIMIT; the party is a cell's own leading text. The
// counter is per-row and resets at every row boundary.

use crate::core::sanitize::tokenize;
use crate::gazetteer::{self, Gazetteer};
use crate::names;
use crate::record::{self, Mdl};
use crate::resolve;
use crate::table::{Row, Table};

/// Name fragments only occur in the first two cells of a row.
pub const NAME_CELL_LIMIT: usize = 2;

pub fn records<'a>(
    table: &'a Table,
    term: u8,
    parties: &'a [&'a str],
    gaz: &'a Gazetteer,
) -> impl Iterator<Item = Mdl> + 'a {
    table
        .rows
        .iter()
        .filter_map(move |row| row_record(row, term, parties, gaz))
}

pub fn row_record(row: &Row, term: u8, parties: &[&str], gaz: &Gazetteer) -> Option<Mdl> {
    let mut name = None;
    let mut ward = None;
    let mut party = None;

    for (cell_ix, cell) in row.cells.iter().enumerate() {
        for frag in &cell.fragments {
            let words = tokenize(frag.text());
            let Some(head) = words.first() else { continue };

            if cell_ix < NAME_CELL_LIMIT && gaz.is_first_name(head) {
                if let Ok(n) = names::decompose(&words, gaz) {
                    name = Some(n);
                }
            } else if gaz.is_city(head) {
                ward = Some(resolve::resolve_ward(frag.text()));
            } else if gazetteer::is_kreis(frag.text()) {
                ward = Some(resolve::resolve_ward(frag.text()));
            }
        }
        let lead = cell.lead.trim();
        if !lead.is_empty() && parties.contains(&lead) {
            party = resolve::resolve_party(lead).ok();
        }
    }

    record::assemble(term, parties, name, ward, party)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::test_gazetteer;
    use crate::resolve::Ward;
    use crate::table::{Cell, Fragment};

    const PARTIES: [&str; 4] = ["CDU", "SPD", "FDP", "Linke"];

    fn link_cell(texts: &[&str]) -> Cell {
        Cell {
            fragments: texts.iter().map(|t| Fragment::Link(s!(*t))).collect(),
            ..Default::default()
        }
    }

    fn lead_cell(lead: &str) -> Cell {
        Cell { lead: s!(lead), ..Default::default() }
    }

    #[test]
    fn fragments_resolve_by_content() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![
                link_cell(&["Anna Schmidt"]),
                lead_cell("SPD"),
                link_cell(&["Köln I"]),
            ],
        };
        let m = row_record(&row, 15, &PARTIES, &g).unwrap();
        assert_eq!(m.name.first_name, "Anna");
        assert_eq!(m.party, "SPD");
        assert_eq!(m.ward, Ward::District(s!("Köln I")));
    }

    #[test]
    fn span_fragments_count_too() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![
                Cell {
                    fragments: vec![Fragment::Span(s!("Hans von Heide"))],
                    ..Default::default()
                },
                lead_cell("CDU"),
                link_cell(&["Soest II"]),
            ],
        };
        let m = row_record(&row, 15, &PARTIES, &g).unwrap();
        assert_eq!(m.name.preposition.as_deref(), Some("von"));
    }

    #[test]
    fn name_fragments_past_the_cell_limit_are_ignored() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![
                lead_cell("SPD"),
                link_cell(&["Köln I"]),
                // a linked colleague name in a later cell must not win
                link_cell(&["Anna Schmidt"]),
            ],
        };
        assert!(row_record(&row, 15, &PARTIES, &g).is_none());
    }

    #[test]
    fn kreis_districts_resolve_without_the_city_gazetteer() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![
                link_cell(&["Anna Schmidt"]),
                lead_cell("Linke"),
                link_cell(&["Rhein-Sieg-Kreis II"]),
            ],
        };
        let m = row_record(&row, 15, &PARTIES, &g).unwrap();
        assert_eq!(m.ward, Ward::District(s!("Rhein-Sieg-Kreis II")));
    }

    #[test]
    fn rows_without_party_lead_are_skipped() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![link_cell(&["Anna Schmidt"]), link_cell(&["Köln I"])],
        };
        assert!(row_record(&row, 15, &PARTIES, &g).is_none());
    }

    #[test]
    fn later_name_fragment_wins_within_the_limit() {
        let g = test_gazetteer();
        let row = Row {
            cells: vec![
                link_cell(&["Karl Wrede", "Anna Schmidt"]),
                lead_cell("FDP"),
                link_cell(&["Aachen III"]),
            ],
        };
        let m = row_record(&row, 15, &PARTIES, &g).unwrap();
        assert_eq!(m.name.first_name, "Anna");
    }
}
