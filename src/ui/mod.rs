mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizController;
use crate::model::AppState;
use crate::view_models::ScreenModel;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;
use std::time::Instant;

pub const WINDOW_TITLE: &str = "Brainstorm Bakery v1.0.0";

/// Ventana principal: 800x600, sin redimensionar.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0])
            .with_resizable(false),
        ..Default::default()
    }
}

/// Código de salida si la ventana se cierra en este estado.
pub fn exit_code(state: &AppState) -> i32 {
    match state {
        AppState::Failed(_) => 1,
        _ => 0,
    }
}

/// Sale del proceso si el estado lo exige; si no, deja que eframe cierre normalmente.
pub fn exit_if_failed(state: &AppState) {
    let code = exit_code(state);
    if code != 0 {
        log::error!("Closing after unrecoverable error");
        std::process::exit(code);
    }
}

impl App for QuizController<ScreenModel> {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cerrar la ventana con el error en pantalla cuenta como aceptar el diálogo
        if ctx.input(|i| i.viewport().close_requested()) {
            exit_if_failed(self.state());
        }

        self.tick(Instant::now());

        // PANEL SUPERIOR: contadores, récord y horneado
        top_panel(self.surface(), ctx);

        // Dispatch por estado
        let state = self.state().clone();
        match state {
            AppState::Failed(_) => views::error::ui_error(self, ctx),
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::AwaitingAnswer | AppState::Resolved(_) => views::quiz::ui_quiz(self, ctx),
        }

        ctx.request_repaint_after(self.next_wake(Instant::now()));
    }
}
