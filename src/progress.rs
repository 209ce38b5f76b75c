// src/progress.rs
/// Progress reporting for the one long-running operation: paging through the
/// character list. Frontends (GUI/CLI) implement this to surface status.
pub trait Progress {
    /// Called at the start with the maximum number of pages that may be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page completes; `offset` is the page's start offset.
    fn item_done(&mut self, _offset: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
