// src/gui/actions/export.rs
use crate::{file, gui::app::App};
use super::current_items;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.out_path_text.trim());
        app.out_path_dirty = false;
    }

    let status_msg = match (app.picks.as_ref(), current_items(app)) {
        (Some(picks), Some(items)) => {
            let path = app.state.options.export.out_path(&picks.character, picks.decade);
            match file::write_export(&path, items) {
                Ok(p) => format!("Exported {} row(s) → {}", items.len(), p.display()),
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
        _ => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
    };

    app.refresh_out_path_text();
    app.status(status_msg);
}
