//! Domain models

pub mod admin;
pub mod asset;
pub mod assignment;
pub mod auth;
pub mod category;
pub mod history;
pub mod vendor;
