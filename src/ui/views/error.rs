use crate::app::QuizController;
use crate::ui::exit_if_failed;
use crate::view_models::ScreenModel;
use egui::{Align2, Button, Context, RichText, Window};

/// Diálogo modal de error. Al aceptar, la aplicación termina con código 1.
pub fn ui_error(app: &QuizController<ScreenModel>, ctx: &Context) {
    let message = app
        .surface()
        .error
        .clone()
        .unwrap_or_else(|| "Unknown error".to_string());

    egui::CentralPanel::default().show(ctx, |_ui| {});

    Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([100.0, 30.0], Button::new("OK")).clicked() {
                    exit_if_failed(app.state());
                }
            });
        });
}
