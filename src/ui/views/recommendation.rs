use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_recommendation(app: &mut QuizApp, ctx: &Context) {
    let Some(quiz) = app.session().recommendation() else {
        return;
    };

    centered_panel(ctx, 320.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Your Quiz Recommendation").size(24.0).strong());
            ui.add_space(12.0);
            ui.label(RichText::new("Based on your responses, we recommend:").strong());
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.heading(quiz.display_name());
                    ui.label(quiz.description());
                });
            });

            ui.add_space(10.0);
            ui.label("Would you like to start this quiz, or would you like to see all available quizzes?");
            ui.add_space(14.0);

            let width = ui.available_width();
            let (all, accept) = two_button_row(
                ui,
                width,
                ("See All Quizzes", true),
                ("Start Recommended Quiz", true),
            );
            if all {
                app.show_all_quizzes();
            }
            if accept {
                app.accept_recommendation();
            }
        });
    });
}
