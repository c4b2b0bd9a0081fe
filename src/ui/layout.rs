use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("🧠 Quiz Master");

            // Barra de navegación: oculta en el propio carrusel
            if app.session().phase() != AppState::Carousel {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("All Quizzes").clicked() {
                        app.show_all_quizzes();
                    }
                });
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.small("© 2025 Quiz Master. All rights reserved.");
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dos botones del mismo ancho en una fila. Devuelve (izquierdo, derecho).
pub fn two_button_row(
    ui: &mut Ui,
    width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let gap = 8.0;
    let btn_w = ((width - gap) / 2.0).max(80.0);
    let btn_h = 36.0;
    let mut clicked = (false, false);
    ui.horizontal(|ui| {
        clicked.0 = ui
            .add_enabled(left.1, Button::new(left.0).min_size([btn_w, btn_h].into()))
            .clicked();
        ui.add_space(gap);
        clicked.1 = ui
            .add_enabled(right.1, Button::new(right.0).min_size([btn_w, btn_h].into()))
            .clicked();
    });
    clicked
}
