// src/specs/shifted_columns.rs
//
// Most recent table generations: same strategy as the fixed-column
// layout, but an inserted leading column (member photo) pushes name and
// party one to the right. Ward stays at index 4.

use crate::gazetteer::Gazetteer;
use crate::record::{self, Mdl};
use crate::resolve;
use crate::table::{Row, Table};

pub const NAME_COL: usize = 1;
pub const PARTY_COL: usize = 3;
pub const WARD_COL: usize = 4;

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
    let name = row
        .cells
        .get(NAME_COL)
        .and_then(|c| super::name_from_cell(&c.text, gaz));
    let party = row
        .cells
        .get(PARTY_COL)
        .and_then(|c| resolve::resolve_party(&c.text).ok());
    let ward = row.cells.get(WARD_COL).map(|c| resolve::resolve_ward(&c.text));
    record::assemble(term, parties, name, ward, party)
}
