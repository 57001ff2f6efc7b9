// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text currently in the search field (raw, as typed)
    pub query: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
