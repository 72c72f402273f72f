use crate::app::QuizController;
use crate::ui::layout::centered_panel;
use crate::view_models::{ScreenModel, WAITING_TEXT};
use egui::{Context, RichText, Spinner};

pub fn ui_loading(app: &QuizController<ScreenModel>, ctx: &Context) {
    let status = app.surface().status.as_deref().unwrap_or(WAITING_TEXT);

    centered_panel(ctx, 120.0, 500.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(32.0));
            ui.add_space(12.0);
            ui.label(RichText::new(status).size(18.0));
        });
    });
}
