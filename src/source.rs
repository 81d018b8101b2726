// src/source.rs
//
// Page source with a local cache: one HTML document per member-list or
// ward page, fetched once and reused across runs.

use std::{error::Error, fs, path::PathBuf};

use crate::config::consts::{
    MEMBER_LIST_TMPL, PAGES_SUBDIR, STORE_DIR, WARD_PAGE_TMPL, WIKI_BASE,
};
use crate::core::net;

pub fn member_list_page(term: u8) -> Result<String, Box<dyn Error>> {
    cached_or_fetch(&MEMBER_LIST_TMPL.replace("{term}", &term.to_string()))
}

/// Ward page titles use underscores where the list text has spaces.
pub fn ward_page(ward: &str) -> Result<String, Box<dyn Error>> {
    cached_or_fetch(&WARD_PAGE_TMPL.replace("{ward}", &ward.replace(' ', "_")))
}

fn cached_or_fetch(title: &str) -> Result<String, Box<dyn Error>> {
    let path = cache_path(title);
    if path.exists() {
        if let Ok(text) = fs::read_to_string(&path) {
            logd!("cache hit: {}", path.display());
            return Ok(text);
        }
    }

    let url = format!("{WIKI_BASE}/{title}");
    logf!("GET {url}");
    let text = net::http_get(&url)?;

    // cache best-effort; a failed write never fails the run
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(e) = fs::write(&path, &text) {
        loge!("cache write {} failed: {e}", path.display());
    }
    Ok(text)
}

fn cache_path(title: &str) -> PathBuf {
    let safe: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(STORE_DIR)
        .join(PAGES_SUBDIR)
        .join(format!("{safe}.html"))
}
