// src/config/state.rs
use super::options::AppOptions;
use crate::decade::Decade;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Character picked in the left panel; no default.
    pub selected_character: Option<String>,

    /// Filter text typed into the character search box
    pub search: String,

    pub decade: Decade,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_character: None,
            search: s!(),
            decade: Decade::D1940s,
            window_w: 1100,
            window_h: 760,
        }
    }
}

impl GuiState {
    /// The (character, decade) pair a recommendation cycle runs for, once a
    /// character has been chosen.
    pub fn selection(&self) -> Option<(String, Decade)> {
        self.selected_character.clone().map(|name| (name, self.decade))
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
