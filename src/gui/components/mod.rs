// src/gui/components/mod.rs
pub mod results;
pub mod saved_modal;
pub mod search_bar;
