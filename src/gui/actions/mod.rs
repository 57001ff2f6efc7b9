// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{search, save_note}.

mod note;    // src/gui/actions/note.rs
mod search;  // src/gui/actions/search.rs

pub use note::save_note;
pub use search::search;
