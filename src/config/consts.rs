// src/config/consts.rs

// Net config
pub const WIKI_BASE: &str = "https://de.wikipedia.org/wiki";
pub const MEMBER_LIST_TMPL: &str =
    "Liste_der_Mitglieder_des_Landtages_Nordrhein-Westfalen_({term}._Wahlperiode)";
pub const WARD_PAGE_TMPL: &str = "Landtagswahlkreis_{ward}";
pub const USER_AGENT: &str = "mdl_scrape/0.6";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const PAGES_SUBDIR: &str = "pages";
pub const LOG_FILE: &str = ".store/debug.log";

// Gazetteer inputs (one entry per line)
pub const GAZETTEER_DIR: &str = "data/gazetteers";
pub const FIRST_NAMES_FILE: &str = "vornamen.txt";
pub const CITIES_FILE: &str = "staedte.txt";
pub const PEER_TITLES_FILE: &str = "peertitel.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const TERM_FILE_TMPL: &str = "mdls_term_{term}";

// Legislature identifiers the record model accepts
pub const TERM_MIN: u8 = 10;
pub const TERM_MAX: u8 = 20;

// Politeness when hitting secondary (ward) pages
pub const REQUEST_PAUSE_MS: u64 = 75;
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
