// src/gui/actions/recommend.rs
use crate::gui::app::App;

/// One recommendation cycle for the current (character, decade) selection.
pub fn recommend(app: &mut App) {
    let Some((name, decade)) = app.state.gui.selection() else { return };

    // Record first: a failed cycle must not re-fire every frame.
    app.last_run = Some((name.clone(), decade));
    app.refresh_out_path_text();

    let Some(rec) = app.recommender.as_ref() else {
        app.status("Not connected (check API keys)");
        return;
    };

    logf!("UI: Recommend character={:?} decade={}", name, decade);
    let res = rec.recommend(&name, decade);

    match res {
        Ok(picks) => {
            let msg = match picks.message() {
                Some(m) => s!(m),
                None => format!("{} comic(s)", picks.items().len()),
            };
            app.picks = Some(picks);
            app.status(msg);
        }
        Err(e) => {
            loge!("UI: Recommend failed for {:?} ({}): {}", name, decade, e);
            app.picks = None;
            app.status(format!("Error: {e}"));
        }
    }
}
