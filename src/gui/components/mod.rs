// src/gui/components/mod.rs
pub mod character_panel;
pub mod decade_bar;
pub mod export_bar;
pub mod results;
