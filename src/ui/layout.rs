use crate::view_models::ScreenModel;
use egui::{CentralPanel, Context, Frame, RichText, Ui};

/// Contadores, récord y tiempo de horneado.
pub fn top_panel(screen: &ScreenModel, ctx: &Context) {
    egui::TopBottomPanel::top("score_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("✅ {}", screen.correct_count)).strong());
            ui.label(RichText::new(format!("❌ {}", screen.incorrect_count)).strong());
            ui.separator();
            ui.label(format!("🏆 {}", screen.highest_score));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&screen.baking_time).monospace());
                ui.label("🎂 Baking time:");
            });
        });
        ui.add_space(4.0);
    });
}

/// Panel centrado verticalmente, con ancho máximo.
pub fn centered_panel<R>(ctx: &Context, est_height: f32, max_width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    CentralPanel::default()
        .show(ctx, |ui| {
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            let result = Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    add_contents(ui)
                })
                .inner;
            ui.add_space(extra);
            result
        })
        .inner
}
