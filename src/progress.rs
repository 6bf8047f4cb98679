// src/progress.rs
/// Status callbacks for a collection run, one call per milestone.
/// The CLI prints them; library callers may pass `None`.
pub trait Progress {
    /// Called once with the first listing URL.
    fn begin(&mut self, _start_url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each listing page has been parsed.
    fn page_done(&mut self, _page: u32, _entries: usize) {}

    /// Called once the loop stops, with the number of records collected.
    fn finish(&mut self, _total: usize) {}
}
