// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod dataset;
pub mod gui;
pub mod notes;
pub mod record;
pub mod render;
pub mod search;
pub mod store;
