use crate::QuizApp;
use crate::ui::helpers::big_button;
use egui::{CentralPanel, Context, RichText};

const CARD_WIDTH: f32 = 260.0;

pub fn ui_carousel(app: &mut QuizApp, ctx: &Context) {
    let cards = app.quiz_cards();
    if cards.is_empty() {
        return;
    }
    let idx = app.carousel_index.min(cards.len() - 1);

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading(RichText::new("Choose a Quiz").size(26.0).strong());
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                // centrar la fila ◀ tarjeta ▶
                let row_w = CARD_WIDTH + 2.0 * 48.0;
                ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));

                if ui.add_enabled(idx > 0, egui::Button::new("◀")).clicked() {
                    app.carousel_index = idx - 1;
                }

                let card = &cards[idx];
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&card.title).size(18.0).strong());
                        ui.add_space(4.0);
                        ui.label(&card.description);
                        ui.add_space(6.0);
                        ui.small(card.count_label());
                        ui.small(card.blurb);
                        ui.add_space(10.0);
                        if big_button(ui, "Start Quiz", CARD_WIDTH * 0.8, 34.0, true) {
                            app.start_quiz(card.quiz);
                        }
                    });
                });

                if ui
                    .add_enabled(idx + 1 < cards.len(), egui::Button::new("▶"))
                    .clicked()
                {
                    app.carousel_index = idx + 1;
                }
            });

            ui.add_space(8.0);
            // puntos de posición
            ui.label(
                (0..cards.len())
                    .map(|i| if i == idx { "●" } else { "○" })
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        });
    });
}
