// src/table.rs
//
// Generic tree the extraction core consumes: tables of rows of cells,
// each cell carrying its full text, its own leading text and any
// embedded link/span fragments. Built from raw page HTML with the
// core::html scanners; no layout knowledge lives here.

use crate::core::html::{inner_after_open_tag, lead_text, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;

/// Member-list pages carry one table per marked section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// "Abgeordnete" — sitting members.
    Members,
    /// "Ausgeschiedene Abgeordnete" — members who left during the term.
    Departed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Link(String),
    Span(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Link(t) | Fragment::Span(t) => t,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Full cell text, tags stripped.
    pub text: String,
    /// The cell's own text before any child tag.
    pub lead: String,
    /// Embedded fragments: every link, then every span.
    pub fragments: Vec<Fragment>,
}

#[derive(Clone, Debug, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default)]
pub struct Table {
    pub rows: Vec<Row>,
}

/// Walk the page's `<h2>` headings; a heading containing one of the
/// section markers claims the next `<table>` block. "Ausgeschiedene" is
/// checked first since its heading also contains "Abgeordnete".
pub fn collect_tables(doc: &str) -> Vec<(Section, Table)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((h_s, h_e)) = next_tag_block_ci(doc, "<h2", "</h2>", pos) {
        pos = h_e;
        let heading = strip_tags(normalize_entities(&inner_after_open_tag(&doc[h_s..h_e])));
        let section = if heading.contains("Ausgeschiedene") {
            Section::Departed
        } else if heading.contains("Abgeordnete") {
            Section::Members
        } else {
            continue;
        };
        if let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", h_e) {
            out.push((section, parse_table(&doc[t_s..t_e])));
        }
    }
    out
}

/// Parse one `<table>` block into rows of cells. Header rows (`<th>`
/// only) come out as empty rows; the layout walkers skip them.
pub fn parse_table(block: &str) -> Table {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(block, "<tr", "</tr>", pos) {
        let tr = &block[tr_s..tr_e];
        pos = tr_e;

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(parse_cell(&tr[td_s..td_e]));
            td_pos = td_e;
        }
        rows.push(Row { cells });
    }
    Table { rows }
}

fn parse_cell(td_block: &str) -> Cell {
    let inner = normalize_entities(&inner_after_open_tag(td_block));

    let mut fragments = Vec::new();
    for (open, close) in [("<a", "</a>"), ("<span", "</span>")] {
        let mut pos = 0usize;
        while let Some((f_s, f_e)) = next_tag_block_ci(&inner, open, close, pos) {
            let text = strip_tags(inner_after_open_tag(&inner[f_s..f_e]));
            if !text.is_empty() {
                fragments.push(match open {
                    "<a" => Fragment::Link(text),
                    _ => Fragment::Span(text),
                });
            }
            pos = f_e;
        }
    }

    Cell {
        text: strip_tags(&inner),
        lead: lead_text(&inner),
        fragments,
    }
}
