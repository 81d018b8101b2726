// src/runner.rs
use std::error::Error;
use std::fs;

use crate::config::params::Params;
use crate::csv::rows_to_string;
use crate::gazetteer::Gazetteer;
use crate::progress::StderrProgress;
use crate::record::{Mdl, HEADERS};
use crate::resolve::parties_for_term;
use crate::scrape::{collect_mdls, ScrapeOptions};
use crate::store;

/// Top-level dispatch: scrape first (if asked), then read back from the
/// store for display/export so every path works on the same data.
pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let term = params
        .term
        .ok_or("--term is required (see --help)")?;

    if params.scrape {
        let gaz = Gazetteer::load()?;
        let mut progress = StderrProgress::default();
        let extraction = collect_mdls(
            &ScrapeOptions { term, ward_details: params.ward_details },
            &gaz,
            Some(&mut progress),
        )?;
        eprintln!(
            "{} records ({} of {} rows skipped)",
            extraction.records.len(),
            extraction.rows_skipped,
            extraction.rows_scanned
        );
        let path = store::save_records(term, &extraction.records, params.format)?;
        eprintln!("Saved {}", path.display());
    }

    if params.show || params.find.is_some() || params.party.is_some() {
        let records = filtered(store::load_records(term)?, term, params)?;
        for mdl in &records {
            println!("{mdl}");
            println!();
        }
        eprintln!("{} record(s)", records.len());
    }

    if let Some(out) = &params.out {
        let records = store::load_records(term)?;
        let rows: Vec<Vec<String>> = records.iter().map(Mdl::to_row).collect();
        let headers: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
        let header_row = params.include_headers.then_some(headers.as_slice());
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(out, rows_to_string(&rows, header_row, params.format))?;
        eprintln!("Exported {} record(s) to {}", rows.len(), out.display());
    }

    Ok(())
}

fn filtered(
    mut records: Vec<Mdl>,
    term: u8,
    params: &Params,
) -> Result<Vec<Mdl>, Box<dyn Error>> {
    if let Some(party) = &params.party {
        let known = parties_for_term(term)
            .ok_or_else(|| format!("No party set known for term {term}"))?;
        if !known.contains(&party.as_str()) {
            return Err(format!("No party {party} in term {term}").into());
        }
        records.retain(|m| m.party == *party);
    }
    if let Some(needle) = &params.find {
        records.retain(|m| m.key().contains(needle.as_str()));
    }
    Ok(records)
}
