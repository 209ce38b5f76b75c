// src/gui/components/export_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Default").clicked() {
            app.state.options.export.reset_path();
            app.out_path_dirty = false;
            app.refresh_out_path_text();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("📥 Export CSV").clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
