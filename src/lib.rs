// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod engine;
pub mod fixtures;
pub mod model;
pub mod store;

pub mod cli;
pub mod gui;
