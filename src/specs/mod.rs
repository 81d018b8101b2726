// src/specs/mod.rs
//! # Layout "specs" module
//!
//! This module hosts the **layout-specific table walkers** for the
//! member-list pages. Each spec focuses on one historical table
//! generation and encodes *where the raw name/party/ward text lives in a
//! row* and *how to hand it to the resolvers*.
//!
//! ## What lives here
//! - **Row walking** per layout generation: fixed column indices for the
//!   oldest and newest generations, content-based fragment scanning for
//!   the middle one.
//! - **Sort-key handling** (the "…!" prefix some name cells hide).
//! - **Light shaping**: each walker exposes a pure per-row function
//!   returning `Option<Mdl>`, and a `records(…)` iterator that is a
//!   plain map-then-filter over the rows.
//! - The **ward page** spec for the optional detail pass (ward number,
//!   eligible-voter count).
//!
//! ## What does **not** live here
//! - **Tokenizing, classification, decomposition** — `core::sanitize`,
//!   `gazetteer`, `names`.
//! - **Fetching/caching** (`source`) and **persistence** (`store`).
//! - **Cross-term dispatch** — `scrape` picks the walker per term.
//!
//! ## Conventions & invariants
//! - Walkers are stateless across rows; the tag-scanned layout's column
//!   counter is per-row and resets at every row boundary.
//! - A row yields a record only when name, party and ward all resolved;
//!   anything less is skipped silently (counts surface in `scrape`).
//! - Emission order equals row order — walkers never reorder.
//!
//! ## Testing notes
//! - Walkers are testable **offline**: build a `table::Table` from a
//!   fixture string and feed synthetic gazetteers.

pub mod fixed_columns;
pub mod shifted_columns;
pub mod tag_scan;
pub mod ward_page;

use crate::core::sanitize::tokenize;
use crate::gazetteer::Gazetteer;
use crate::names::{self, NameParts};

/// Decompose a name cell's text, minus any hidden sort key: tables
/// prefix "Zachert, Ulrich!" style keys, and only the text after the
/// last '!' is the display name.
pub(crate) fn name_from_cell(text: &str, gaz: &Gazetteer) -> Option<NameParts> {
    let text = match text.rfind('!') {
        Some(i) => &text[i + 1..],
        None => text,
    };
    let words = tokenize(text);
    match names::decompose(&words, gaz) {
        Ok(name) => Some(name),
        Err(e) => {
            logd!("name cell '{text}' rejected: {e}");
            None
        }
    }
}
