use crate::QuizApp;
use crate::ui::helpers::progress_row;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let session = app.session();
    let Some(question) = session.current_question(&app.catalog).cloned() else {
        return;
    };
    let total = session.total_questions(&app.catalog);
    let number = session.cursor() + 1;
    let progress = session.progress(&app.catalog);
    let can_go_back = session.can_go_back();
    let title = session
        .active_dataset(&app.catalog)
        .map(|d| d.title.clone())
        .unwrap_or_default();

    centered_panel(ctx, 420.0, 620.0, |ui| {
        ui.label(RichText::new(title).strong());
        progress_row(ui, &format!("Question {number} of {total}"), progress);
        ui.add_space(14.0);

        ui.heading(&question.prompt);
        ui.add_space(10.0);

        for (i, option) in question.options.iter().enumerate() {
            ui.radio_value(&mut app.selected_option, Some(i), option);
            ui.add_space(4.0);
        }

        ui.add_space(14.0);
        let next_label = if number == total { "Finish Quiz" } else { "Next Question" };
        let width = ui.available_width();
        let (back, next) = two_button_row(
            ui,
            width,
            ("⬅ Back", can_go_back),
            (next_label, app.selected_option.is_some()),
        );
        if back {
            app.go_back();
        }
        if next {
            app.submit_selected();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
