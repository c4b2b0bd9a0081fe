use crate::QuizApp;
use crate::assistant::Role;
use egui::{Align2, Area, Color32, Context, Id, Key, RichText, ScrollArea, TextEdit};

/// Botón flotante + ventana de chat del asistente
pub fn ui_assistant(app: &mut QuizApp, ctx: &Context) {
    Area::new(Id::new("assistant_toggle"))
        .anchor(Align2::RIGHT_BOTTOM, [-18.0, -44.0])
        .show(ctx, |ui| {
            let label = if app.assistant.open { "✖" } else { "💬" };
            if ui
                .add(egui::Button::new(RichText::new(label).size(20.0)).min_size([44.0, 44.0].into()))
                .clicked()
            {
                app.assistant.open = !app.assistant.open;
            }
        });

    if !app.assistant.open {
        return;
    }

    let mut open = app.assistant.open;
    egui::Window::new("Quiz Assistant")
        .open(&mut open)
        .anchor(Align2::RIGHT_BOTTOM, [-18.0, -96.0])
        .default_width(340.0)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .max_height(260.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for m in app.assistant.messages() {
                        let (fill, align) = match m.role {
                            Role::User => (ui.visuals().extreme_bg_color, egui::Align::Max),
                            Role::Assistant => (ui.visuals().faint_bg_color, egui::Align::Min),
                        };
                        ui.with_layout(egui::Layout::top_down(align), |ui| {
                            egui::Frame::default()
                                .fill(fill)
                                .corner_radius(egui::CornerRadius::same(6))
                                .inner_margin(egui::Margin::symmetric(8, 6))
                                .show(ui, |ui| {
                                    ui.set_max_width(260.0);
                                    ui.label(&m.text);
                                });
                        });
                        ui.add_space(4.0);
                    }
                    if app.assistant.is_thinking() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("thinking...").color(Color32::GRAY).italics());
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let input = ui.add(
                    TextEdit::singleline(&mut app.assistant.input)
                        .hint_text("Ask for help...")
                        .desired_width(240.0),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let can_send = !app.assistant.input.trim().is_empty();
                let send = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();
                if (enter || send) && can_send {
                    app.send_assistant_message();
                    input.request_focus();
                }
            });
        });
    app.assistant.open = open;
}
