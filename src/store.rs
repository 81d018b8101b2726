// src/store.rs
//
// Record persistence: one CSV/TSV file per term under the out dir,
// stable column shape from record::HEADERS.

use std::{error::Error, fs, io, path::PathBuf};

use crate::config::consts::{DEFAULT_OUT_DIR, TERM_FILE_TMPL};
use crate::csv::{parse_rows, rows_to_string, Delim};
use crate::record::{Mdl, HEADERS};

pub fn term_path(term: u8, delim: Delim) -> PathBuf {
    let stem = TERM_FILE_TMPL.replace("{term}", &term.to_string());
    PathBuf::from(DEFAULT_OUT_DIR).join(format!("{stem}.{}", delim.ext()))
}

pub fn save_records(term: u8, records: &[Mdl], delim: Delim) -> io::Result<PathBuf> {
    let path = term_path(term, delim);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let headers: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
    let rows: Vec<Vec<String>> = records.iter().map(Mdl::to_row).collect();
    fs::write(&path, rows_to_string(&rows, Some(&headers), delim))?;
    Ok(path)
}

/// Load a term's records, trying both delimiters. Row order is file
/// order, which is the original emission order.
pub fn load_records(term: u8) -> Result<Vec<Mdl>, Box<dyn Error>> {
    for delim in [Delim::Csv, Delim::Tsv] {
        let path = term_path(term, delim);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        let mut rows = parse_rows(&text, delim);
        if rows.first().is_some_and(|r| r.first().map(String::as_str) == Some(HEADERS[0])) {
            rows.remove(0);
        }
        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            out.push(Mdl::from_row(row)?);
        }
        return Ok(out);
    }
    Err(format!("no stored records for term {term}; run --scrape first").into())
}
