// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Barra fina de progreso con el porcentaje a la derecha
pub fn progress_row(ui: &mut Ui, label: &str, fraction: f32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{}%", (fraction * 100.0).round() as u32));
        });
    });
    ui.add(egui::ProgressBar::new(fraction).desired_height(6.0));
}

/// ✔ / ✘ coloreado
pub fn verdict(ok: bool) -> RichText {
    if ok {
        RichText::new("✔").color(Color32::from_rgb(40, 170, 80)).strong()
    } else {
        RichText::new("✘").color(Color32::from_rgb(210, 60, 60)).strong()
    }
}
