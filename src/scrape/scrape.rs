// src/scrape.rs
use std::{error::Error, thread, time::Duration};

use crate::config::consts::{JITTER_MS, REQUEST_PAUSE_MS};
use crate::gazetteer::Gazetteer;
use crate::progress::Progress;
use crate::record::Mdl;
use crate::resolve::{parties_for_term, Ward};
use crate::source;
use crate::specs::{fixed_columns, shifted_columns, tag_scan, ward_page};
use crate::table::{self, Section};

/// Which walker reads a term's tables. Terms 16+ share the shifted
/// layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    FixedColumns,
    TagScan,
    ShiftedColumns,
}

pub fn layout_for_term(term: u8) -> Option<LayoutKind> {
    match term {
        14 => Some(LayoutKind::FixedColumns),
        15 => Some(LayoutKind::TagScan),
        16 | 17 => Some(LayoutKind::ShiftedColumns),
        _ => None,
    }
}

pub struct ScrapeOptions {
    pub term: u8,
    pub ward_details: bool,
}

/// What one run produced. Skipped-row counts are part of the contract:
/// extraction never aborts on a bad row, so the counts are the only
/// trace those rows leave.
pub struct Extraction {
    pub records: Vec<Mdl>,
    pub rows_scanned: usize,
    pub rows_skipped: usize,
}

/// Fetch (or load from cache) a term's member-list page and extract
/// every fully resolvable record, in row order.
pub fn collect_mdls(
    opts: &ScrapeOptions,
    gaz: &Gazetteer,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Extraction, Box<dyn Error>> {
    let term = opts.term;
    let layout = layout_for_term(term)
        .ok_or_else(|| format!("No table layout known for term {term}"))?;
    let parties = parties_for_term(term)
        .ok_or_else(|| format!("No party set known for term {term}"))?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching member list for term {term}…"));
    }
    let doc = source::member_list_page(term)?;

    let tables = table::collect_tables(&doc);
    if tables.is_empty() {
        return Err("no member tables found in page".into());
    }

    let mut records: Vec<Mdl> = Vec::new();
    let mut rows_scanned = 0usize;
    for (section, tbl) in &tables {
        // Only the newest layout also covers departed members.
        if *section == Section::Departed && layout != LayoutKind::ShiftedColumns {
            continue;
        }
        rows_scanned += tbl.rows.len();
        match layout {
            LayoutKind::FixedColumns => {
                records.extend(fixed_columns::records(tbl, term, parties, gaz))
            }
            LayoutKind::TagScan => records.extend(tag_scan::records(tbl, term, parties, gaz)),
            LayoutKind::ShiftedColumns => {
                records.extend(shifted_columns::records(tbl, term, parties, gaz))
            }
        }
    }
    let rows_skipped = rows_scanned - records.len();
    logf!(
        "term {term}: {} records, {rows_skipped} of {rows_scanned} rows skipped",
        records.len()
    );

    if opts.ward_details {
        augment_ward_details(&mut records, progress);
    }

    Ok(Extraction { records, rows_scanned, rows_skipped })
}

/// Best-effort detail pass over every district record. Failures are
/// logged and leave the record as it was.
fn augment_ward_details(records: &mut [Mdl], mut progress: Option<&mut dyn Progress>) {
    let total = records.iter().filter(|m| !m.ward.is_at_large()).count();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut done = 0usize;
    for mdl in records.iter_mut() {
        let Ward::District(ward) = &mdl.ward else { continue };
        let title = ward_page::page_title_ward(ward, &mdl.name.last_name);
        match ward_page::fetch(&title) {
            Ok(details) => {
                mdl.ward_no = details.ward_no;
                mdl.voter_count = details.voter_count;
            }
            Err(e) => loge!("ward details for {title}: {e}"),
        }

        done += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(done);
        }
        let jitter = (done as u64) % JITTER_MS;
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
}
