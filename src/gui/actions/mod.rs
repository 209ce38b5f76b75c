// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,recommend}.

mod copy;      // src/gui/actions/copy.rs
mod export;    // src/gui/actions/export.rs
mod recommend; // src/gui/actions/recommend.rs

pub use copy::copy;
pub use export::export;
pub use recommend::recommend;

use crate::{gui::app::App, recommend::Recommendation};

/// Items of the last cycle, if it found any.
#[inline]
pub(super) fn current_items(app: &App) -> Option<&[Recommendation]> {
    app.picks
        .as_ref()
        .map(|p| p.items())
        .filter(|items| !items.is_empty())
}
