// src/config/mod.rs
//
// Explicit configuration. Nothing in here is a process-wide singleton:
// `Settings` is built once in `main` and handed to whoever needs paths.

pub mod consts;
pub mod options;
pub mod settings;
pub mod state;

pub use settings::Settings;
