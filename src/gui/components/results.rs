// src/gui/components/results.rs
//
// Draws the current View. Field tables are per-block egui_extras tables
// without their own scrolling; the whole area scrolls vertically.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{actions, app::{App, View}},
    render::{Document, ResultBlock, NOTE_HEADING, NOTE_PLACEHOLDER, NOTE_SAVE_BUTTON},
};

const ERROR_RED: Color32 = Color32::from_rgb(200, 40, 40);
const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut save_clicked: Option<usize> = None;

    match &mut app.view {
        View::Idle { message: None } => {}
        View::Idle { message: Some(msg) } => {
            ui.label(RichText::new(msg.as_str()).color(ERROR_RED));
        }
        View::Results(doc) => {
            if let Some(msg) = doc.message() {
                // Not found
                ui.label(RichText::new(msg).color(ERROR_RED));
            }
            if let Document::Results { summary, blocks } = doc {
                ui.label(summary.as_str());
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .id_salt("results_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (ix, block) in blocks.iter_mut().enumerate() {
                            if draw_block(ui, ix, block) {
                                save_clicked = Some(ix);
                            }
                            ui.add_space(6.0);
                        }
                    });
            }
        }
    }

    // Handle save after the borrow ends
    if let Some(ix) = save_clicked {
        actions::save_note(app, ix);
    }
}

/// Returns true when this block's save button was clicked.
fn draw_block(ui: &mut egui::Ui, ix: usize, block: &mut ResultBlock) -> bool {
    let mut clicked = false;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(block.heading.as_str());

        TableBuilder::new(ui)
            .id_salt(("fields", ix))
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder())
            .body(|mut body| {
                for (label, value) in &block.fields {
                    body.row(ROW_H, |mut row| {
                        row.col(|ui| { ui.strong(label.as_str()); });
                        row.col(|ui| { ui.label(value.as_str()); });
                    });
                }
            });

        if let Some(note) = block.note.as_mut() {
            ui.add_space(4.0);
            ui.label(RichText::new(NOTE_HEADING).strong());
            ui.add(
                egui::TextEdit::multiline(&mut note.text)
                    .id_salt(("note", ix))
                    .desired_rows(3)
                    .desired_width(f32::INFINITY)
                    .hint_text(NOTE_PLACEHOLDER),
            );
            if ui.button(NOTE_SAVE_BUTTON).clicked() {
                clicked = true;
            }
        }
    });

    clicked
}
