// src/specs/ward_page.rs
//
// Secondary page per electoral ward: the infobox carries the ward
// number and the eligible-voter count. This pass is best effort — a
// page that cannot be read leaves the record unaugmented.

use std::error::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::source;

pub struct WardDetails {
    pub ward_no: Option<u32>,
    pub voter_count: Option<u32>,
}

/// A few member-list ward labels differ from the ward page titles;
/// "Kreis Aachen II" split into two pages along member surnames.
pub fn page_title_ward(ward: &str, last_name: &str) -> String {
    match ward {
        "Kreis Aachen I" => s!("Aachen III"),
        "Hochsauerlandkreis II – Soest III" => s!("Hochsauerlandkreis II"),
        "Kreis Aachen II" if matches!(last_name, "Wirtz" | "Weidenhaupt") => s!("Aachen IV"),
        _ => s!(ward),
    }
}

pub fn fetch(ward_title: &str) -> Result<WardDetails, Box<dyn Error>> {
    let doc = source::ward_page(ward_title)?;
    parse_infobox(&doc)
}

/// Scan the infobox's `<td>` cells as label/value pairs.
pub fn parse_infobox(doc: &str) -> Result<WardDetails, Box<dyn Error>> {
    let table = slice_between_ci(doc, "<table class=\"infobox", "</table>")
        .ok_or("ward infobox not found")?;

    let mut tds: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(table, "<td", "</td>", pos) {
        let inner = inner_after_open_tag(&table[td_s..td_e]);
        tds.push(strip_tags(normalize_entities(&inner)));
        pos = td_e;
    }

    let mut details = WardDetails { ward_no: None, voter_count: None };
    for (i, td) in tds.iter().enumerate() {
        let Some(value) = tds.get(i + 1) else { break };
        if td.contains("Wahlkreisnummer") {
            details.ward_no = leading_number(value);
        } else if td.contains("Wahlberechtigte") {
            details.voter_count = grouped_number(value);
        }
    }
    Ok(details)
}

/// "109 Gütersloh III" → 109
fn leading_number(text: &str) -> Option<u32> {
    normalize_ws(text).split(' ').next()?.parse().ok()
}

/// "110.679[2]" / "110 679 (2017)" → 110679; footnote refs and
/// parenthesized tails are cut, "." and " " group digits.
fn grouped_number(text: &str) -> Option<u32> {
    let t = normalize_ws(text);
    let t = t.split('[').next().unwrap_or("");
    let digits: String = t
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ' ')
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() { None } else { digits.parse().ok() }
}
