// src/core/mod.rs

pub mod auth;
pub mod net;
pub mod sanitize;

pub use auth::AuthParams;
pub use net::{HttpGet, Query, ReqwestGet};
