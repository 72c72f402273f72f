use crate::app::QuizController;
use crate::model::OptionLabel;
use crate::ui::helpers::answer_button;
use crate::ui::layout::centered_panel;
use crate::view_models::ScreenModel;
use egui::{Button, Context, ProgressBar, RichText, vec2};
use std::time::Instant;

pub fn ui_quiz(app: &mut QuizController<ScreenModel>, ctx: &Context) {
    // Copia para poder pintar y mutar el controlador en el mismo frame
    let screen = app.surface().clone();
    let max_width = 640.0;
    let button_h = 48.0;

    let mut chosen: Option<OptionLabel> = None;
    let mut next = false;
    let mut pause = false;

    centered_panel(ctx, 420.0, max_width, |ui| {
        let content_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&screen.question).heading());
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let bar_w = content_width - 90.0;
            ui.add(
                ProgressBar::new(f32::from(screen.progress) / 100.0)
                    .desired_width(bar_w.max(100.0))
                    .text(format!("{}%", screen.progress)),
            );
            ui.label(RichText::new(&screen.stopwatch).monospace());
        });
        ui.add_space(12.0);

        // Opciones en rejilla 2x2
        let half = (content_width - ui.spacing().item_spacing.x) / 2.0;
        for row in OptionLabel::ALL.chunks(2) {
            ui.horizontal(|ui| {
                for &label in row {
                    if answer_button(ui, label, screen.answer(label), vec2(half, button_h)) {
                        chosen = Some(label);
                    }
                }
            });
        }

        ui.add_space(8.0);
        if !screen.response_time.is_empty() {
            ui.label(RichText::new(&screen.response_time).strong());
        }
        if let Some(trivia) = &screen.trivia {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("💡 {trivia}")).italics());
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if screen.pause_visible && ui.button(&screen.pause_label).clicked() {
                pause = true;
            }
            if ui.add_enabled(screen.next_enabled, Button::new("Next ➡")).clicked() {
                next = true;
            }
        });
    });

    let now = Instant::now();
    if let Some(label) = chosen {
        app.check_answer(label, now);
    }
    if pause {
        app.toggle_pause(now);
    }
    if next {
        app.advance();
    }
}
