// src/gui/actions/search.rs
use crate::{
    gui::app::{App, View},
    render::{self, Document},
};

/// Search trigger (button or Enter). The only transition out of Idle.
pub fn search(app: &mut App) {
    let query = app.state.gui.query.clone();

    if app.is_loading() {
        logd!("Search: Dataset not loaded yet, scanning empty set");
    }

    let doc = render::search_and_render(&query, &app.dataset, &app.notes);

    app.view = if doc == Document::Prompt {
        View::Idle { message: doc.message() }
    } else {
        View::Results(doc)
    };
}
