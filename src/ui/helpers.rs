// src/ui/helpers.rs
use crate::model::{Highlight, OptionLabel};
use crate::view_models::AnswerButton;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const CORRECT_FILL: Color32 = Color32::from_rgb(0x5c, 0xb8, 0x5c);
pub const WRONG_FILL: Color32 = Color32::from_rgb(0xd9, 0x53, 0x4f);

pub fn highlight_fill(highlight: Highlight) -> Option<Color32> {
    match highlight {
        Highlight::None => None,
        Highlight::Correct => Some(CORRECT_FILL),
        Highlight::Wrong => Some(WRONG_FILL),
    }
}

/// Botón de respuesta. Devuelve `true` solo si estaba habilitado y se pulsó.
///
/// Los botones resaltados se pintan activos para que el color no salga apagado,
/// pero ya no aceptan clics.
pub fn answer_button(ui: &mut Ui, label: OptionLabel, button: &AnswerButton, size: Vec2) -> bool {
    let fill = highlight_fill(button.highlight);
    let text = match fill {
        Some(_) => RichText::new(button.caption(label)).strong().color(Color32::WHITE),
        None => RichText::new(button.caption(label)),
    };
    let mut widget = Button::new(text).wrap().min_size(size);
    if let Some(fill) = fill {
        widget = widget.fill(fill);
    }

    let interactive = button.enabled || fill.is_some();
    let clicked = ui.add_enabled(interactive, widget).clicked();
    clicked && button.enabled
}
