// src/progress.rs
/// Progress reporting for batch resolution.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of records.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record has been resolved, with its display name.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
