// src/config/params.rs
use std::path::PathBuf;

use crate::csv::Delim;

#[derive(Clone)]
pub struct Params {
    pub term: Option<u8>,           // which legislature to work on
    pub scrape: bool,               // fetch + extract + save to store
    pub ward_details: bool,         // augment records from ward pages
    pub show: bool,                 // print stored records
    pub find: Option<String>,       // key substring filter for --show
    pub party: Option<String>,      // party filter for --show
    pub out: Option<PathBuf>,       // export path (file or directory)
    pub format: Delim,
    pub include_headers: bool,      // include headers row in export
}

impl Params {
    pub fn new() -> Self {
        Self {
            term: None,
            scrape: false,
            ward_details: false,
            show: false,
            find: None,
            party: None,
            out: None,
            format: Delim::Csv,
            include_headers: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
