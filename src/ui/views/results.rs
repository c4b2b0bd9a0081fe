use crate::QuizApp;
use crate::app::completion::result_heading;
use crate::ui::helpers::verdict;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Color32, Context, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(result) = app.session().result().cloned() else {
        return;
    };
    let rows = app.review_rows();

    centered_panel(ctx, 520.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Quiz Results").size(24.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(result_heading(result.score)).size(20.0).strong());
            ui.label(
                RichText::new(format!("{} / {}", result.correct_answers, result.total_questions))
                    .size(28.0)
                    .strong(),
            );
            ui.add(egui::ProgressBar::new(result.score as f32 / 100.0).desired_height(6.0));
            ui.small(format!("Score: {}%", result.score));
        });

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.label(&app.message);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Answer Review:").strong());
        ui.separator();

        ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            for row in &rows {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(verdict(row.is_correct));
                        ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
                    });
                    ui.label(format!("Your answer: {}", row.user_answer));
                    if let Some(correct) = &row.correct_answer {
                        ui.colored_label(
                            Color32::from_rgb(40, 150, 70),
                            format!("Correct answer: {correct}"),
                        );
                    }
                });
                ui.add_space(4.0);
            }
        });

        ui.add_space(12.0);
        let width = ui.available_width();
        let (again, another) = two_button_row(
            ui,
            width,
            ("⟲ Try Again", true),
            ("Try Another Quiz", true),
        );
        if again {
            app.restart();
        }
        if another {
            app.show_all_quizzes();
        }
    });
}
