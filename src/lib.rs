// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod decade;
pub mod file;
pub mod gui;
pub mod progress;
pub mod recommend;

pub use catalog::CatalogClient;
pub use decade::Decade;
pub use recommend::{Outcome, Picks, Recommendation, Recommender};
