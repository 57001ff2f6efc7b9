// src/gui/components/search_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut trigger = false;

    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("의원 또는 보좌진 이름")
                .desired_width(320.0),
        );

        // Enter in a singleline field drops focus on the same frame
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            trigger = true;
            field.request_focus();
        }

        if ui.button("검색").clicked() {
            trigger = true;
        }
    });

    if trigger {
        logd!("UI: Search triggered → {:?}", app.state.gui.query);
        actions::search(app);
    }
}
