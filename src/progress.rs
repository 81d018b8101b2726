// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (page fetches, the ward-detail pass). Frontends implement this to
/// surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g. one ward page).
    fn item_done(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// CLI sink: status lines on stderr, data stays on stdout.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, count: usize) {
        eprintln!("  {count}/{}", self.total);
    }

    fn finish(&mut self) {
        eprintln!("done.");
    }
}
