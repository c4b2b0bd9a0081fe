mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: sirve igual en nativo y en web
        let now = ctx.input(|i| i.time);
        self.tick(now);

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Carga bloqueante: se cubre la vista actual hasta que llegue el dataset
        if let Some(pending) = self.pending_start {
            views::loading::ui_loading(self, ctx, pending.quiz);
        } else {
            match self.session().phase() {
                AppState::Intro => views::intro::ui_intro(self, ctx),
                AppState::InProgress => views::quiz::ui_quiz(self, ctx),
                AppState::Completed => {
                    if self.session().recommendation().is_some() {
                        views::recommendation::ui_recommendation(self, ctx)
                    } else {
                        views::results::ui_results(self, ctx)
                    }
                }
                AppState::Carousel => views::carousel::ui_carousel(self, ctx),
            }
        }

        views::assistant::ui_assistant(self, ctx);

        if let Some(due) = self.next_wakeup() {
            let wait = (due - self.now()).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
    }
}
