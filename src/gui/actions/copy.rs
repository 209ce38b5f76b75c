// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(items) = super::current_items(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let txt = file::recommendations_to_csv(items);
    logf!("Copy: rows={}", items.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
