// src/gui/components/saved_modal.rs

use eframe::egui;
use crate::{gui::app::App, render::NOTE_SAVED};

/// Blocking confirmation after a note save.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.note_saved {
        return;
    }

    let modal = egui::Modal::new(egui::Id::new("note_saved")).show(ctx, |ui| {
        ui.label(NOTE_SAVED);
        ui.add_space(8.0);
        ui.button("확인").clicked()
    });

    if modal.inner || modal.should_close() {
        app.note_saved = false;
    }
}
