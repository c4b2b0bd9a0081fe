use crate::QuizApp;
use crate::model::QuizId;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

/// Pantalla mientras una intención espera su dataset (o si la carga falló)
pub fn ui_loading(app: &mut QuizApp, ctx: &Context, quiz: QuizId) {
    let failure = app.catalog.failure(quiz).map(str::to_owned);

    centered_panel(ctx, 180.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            match failure {
                Some(reason) => {
                    ui.heading(RichText::new("Error").color(Color32::from_rgb(210, 60, 60)));
                    ui.add_space(6.0);
                    ui.label("There was a problem loading the quiz. Please try again later.");
                    ui.small(reason);
                    ui.add_space(12.0);
                    if ui.button("⟲ Try again").clicked() {
                        app.retry_load(quiz);
                    }
                }
                None => {
                    ui.heading(quiz.display_name());
                    ui.add_space(12.0);
                    ui.spinner();
                    ui.label("Loading...");
                }
            }
            ui.add_space(12.0);
            if ui.button("Cancel").clicked() {
                app.pending_start = None;
            }
        });
    });
}
