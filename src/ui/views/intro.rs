use crate::QuizApp;
use crate::app::{DatasetLookup, Intent};
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_intro(app: &mut QuizApp, ctx: &Context) {
    let quiz = app.session().active_quiz();
    let (title, description, count) = match app.catalog.dataset(quiz) {
        Some(d) => (d.title.clone(), d.description.clone(), Some(d.questions.len())),
        None => (quiz.display_name().to_owned(), quiz.description().to_owned(), None),
    };

    centered_panel(ctx, 260.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(title).size(26.0).strong());
            ui.add_space(10.0);
            ui.label(description);
            ui.add_space(8.0);
            match count {
                Some(n) => ui.label(format!("{n} questions")),
                None => ui.label("Loading..."),
            };
            ui.add_space(18.0);

            let width = ui.available_width();
            let (all, start) = two_button_row(
                ui,
                width,
                ("See All Quizzes", true),
                ("Start Quiz", true),
            );
            if all {
                app.show_all_quizzes();
            }
            if start {
                app.dispatch(Intent::Start(None));
            }
        });
    });
}
