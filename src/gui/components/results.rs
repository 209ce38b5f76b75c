// src/gui/components/results.rs
//
// Renders the last cycle: heading, then per comic a linked title,
// description, cover image and separator. Non-found outcomes show a message.

use eframe::egui;
use crate::{core::sanitize::normalize_ws, gui::app::App, recommend::Outcome};

const COVER_WIDTH: f32 = 300.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(picks) = &app.picks else {
        if app.state.gui.selected_character.is_none() {
            ui.label("Pick a character to see recommendations.");
        }
        return;
    };

    match &picks.outcome {
        Outcome::NotFound => {
            if let Some(msg) = picks.message() {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
        }
        Outcome::Empty => {
            if let Some(msg) = picks.message() {
                ui.label(msg);
            }
        }
        Outcome::Found(items) => {
            ui.heading(picks.heading());

            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for r in items {
                        let title = egui::RichText::new(&r.title).heading();
                        if r.detail_url.is_empty() {
                            ui.label(title);
                        } else {
                            ui.hyperlink_to(title, &r.detail_url);
                        }
                        // One line per description on screen; export keeps the original.
                        ui.label(normalize_ws(&r.description));
                        ui.add(egui::Image::from_uri(r.image_url.clone()).max_width(COVER_WIDTH));
                        ui.separator();
                    }
                });
        }
    }
}
