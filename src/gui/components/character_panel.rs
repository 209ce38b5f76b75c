// src/gui/components/character_panel.rs
//
// Left panel: search box + filtered character list. Clicking a name selects it
// (single selection, nothing selected at start). Selection changes are picked
// up by App::update, which runs the recommendation cycle.

use eframe::egui;
use crate::gui::app::App;

const ROW_HEIGHT: f32 = 18.0;

/// Case-insensitive substring filter, order preserved.
pub fn filter_names<'a>(names: &'a [String], query: &str) -> Vec<&'a String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return names.iter().collect();
    }
    names.iter().filter(|n| n.to_lowercase().contains(&q)).collect()
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Characters");

    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.search)
            .hint_text("Search or select a character...")
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            app.state.gui.search.clear();
            app.state.gui.selected_character = None;
            app.picks = None;
            app.last_run = None;
            app.refresh_out_path_text();
            logd!("UI: Selection cleared");
        }
        if ui.button("Reload").clicked() {
            if let Some(rec) = app.recommender.as_mut() {
                rec.reload_characters();
            }
            app.load_characters();
            logf!("UI: Character list reloaded ({})", app.characters.len());
        }
    });

    ui.separator();

    if let Some(sel) = &app.state.gui.selected_character {
        ui.label(egui::RichText::new(sel).strong());
        ui.separator();
    }

    let filtered = filter_names(&app.characters, &app.state.gui.search);
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("characters_panel_scroll")
        .auto_shrink([false, false])
        .show_rows(ui, ROW_HEIGHT, filtered.len(), |ui, range| {
            for name in &filtered[range] {
                let is_selected = app.state.gui.selected_character.as_deref() == Some(name.as_str());
                if ui.selectable_label(is_selected, name.as_str()).clicked() && !is_selected {
                    clicked = Some((*name).clone());
                }
            }
        });

    if let Some(name) = clicked {
        logf!("UI: Character → {:?}", name);
        app.state.gui.selected_character = Some(name);
    }
}
