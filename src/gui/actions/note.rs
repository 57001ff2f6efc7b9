// src/gui/actions/note.rs
use crate::gui::app::{App, View};

/// Persist the editor text of result block `ix` and raise the confirmation.
pub fn save_note(app: &mut App, ix: usize) {
    let View::Results(doc) = &app.view else {
        logd!("Note: Save clicked with no results on screen");
        return;
    };
    let Some(editor) = doc.blocks().get(ix).and_then(|b| b.note.as_ref()) else {
        loge!("Note: No editor at block {}", ix);
        return;
    };

    app.notes.save(&editor.key, &editor.text);
    app.note_saved = true;
}
