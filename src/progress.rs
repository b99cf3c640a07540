// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch).
/// Frontends implement this to surface status to users. Narration is
/// cosmetic; nothing in the data contract depends on it.
pub trait Progress {
    /// Called once the number of publications to process is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one publication has been processed.
    fn item_done(&mut self, _title: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints every status line to stdout. The CLI's default sink.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
