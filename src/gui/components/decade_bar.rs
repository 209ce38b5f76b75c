// src/gui/components/decade_bar.rs

use eframe::egui;
use crate::{decade::Decade, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.gui.decade;

    ui.horizontal(|ui| {
        egui::ComboBox::from_label("Choose a timeframe for the comics you'd like to see")
            .selected_text(app.state.gui.decade.label())
            .show_ui(ui, |ui| {
                for d in Decade::ALL {
                    ui.selectable_value(&mut app.state.gui.decade, d, d.label());
                }
            });

        let range = app.state.gui.decade.years();
        ui.label(format!("({}–{})", range.start, range.end));

        // Same selection again → force a fresh cycle.
        if ui.button("Refresh").clicked() {
            app.last_run = None;
        }
    });

    if app.state.gui.decade != before {
        logf!("UI: Decade → {}", app.state.gui.decade);
        app.refresh_out_path_text();
    }
}
