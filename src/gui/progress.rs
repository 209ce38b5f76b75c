// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Loading characters…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, offset: u32) {
        self.done += 1;
        logd!("UI: Character page offset={} ({}/{})", offset, self.done, self.total);
        self.set_status(format!("Loaded character page {} (max {})", self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(format!("Character list ready ({} page(s))", self.done));
    }
}
