// src/view_models.rs

use crate::model::{Highlight, OptionLabel};
use std::collections::BTreeMap;

pub const WAITING_TEXT: &str = "Tunggu sebentar...";
pub const PAUSE_TEXT: &str = "Pause";
pub const RESUME_TEXT: &str = "Resume";
pub const TIMEOUT_TEXT: &str = "Time out!";

/// Lo que el controlador puede pedirle a la interfaz.
pub trait QuizSurface {
    fn set_question_text(&mut self, text: &str);
    fn set_status(&mut self, text: &str);
    fn set_option_text(&mut self, label: OptionLabel, text: &str);
    fn set_option_enabled(&mut self, label: OptionLabel, enabled: bool);
    fn set_option_highlight(&mut self, label: OptionLabel, highlight: Highlight);
    fn set_progress(&mut self, percent: u8);
    fn set_stopwatch(&mut self, text: &str);
    fn set_response_time(&mut self, text: &str);
    fn set_trivia(&mut self, trivia: Option<&str>);
    fn set_pause_control(&mut self, visible: bool, label: &str);
    fn set_next_enabled(&mut self, enabled: bool);
    fn set_counters(&mut self, correct: u32, incorrect: u32);
    fn set_highest_score(&mut self, text: &str);
    fn set_baking_time(&mut self, text: &str);
    fn show_error(&mut self, message: &str);

    fn set_all_options_enabled(&mut self, enabled: bool) {
        for label in OptionLabel::ALL {
            self.set_option_enabled(label, enabled);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerButton {
    pub text: String,
    pub enabled: bool,
    pub highlight: Highlight,
}

impl AnswerButton {
    pub fn caption(&self, label: OptionLabel) -> String {
        format!("{label}: {}", self.text)
    }
}

/// Estado de pantalla que pinta la vista de egui. También sirve de doble en los tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenModel {
    pub question: String,
    pub status: Option<String>,
    pub answers: BTreeMap<OptionLabel, AnswerButton>,
    pub progress: u8,
    pub stopwatch: String,
    pub response_time: String,
    pub trivia: Option<String>,
    pub pause_visible: bool,
    pub pause_label: String,
    pub next_enabled: bool,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub highest_score: String,
    pub baking_time: String,
    pub error: Option<String>,
}

impl Default for ScreenModel {
    fn default() -> Self {
        Self {
            question: String::new(),
            status: None,
            answers: OptionLabel::ALL
                .into_iter()
                .map(|label| (label, AnswerButton::default()))
                .collect(),
            progress: 100,
            stopwatch: "0.000s".to_string(),
            response_time: String::new(),
            trivia: None,
            pause_visible: false,
            pause_label: PAUSE_TEXT.to_string(),
            next_enabled: false,
            correct_count: 0,
            incorrect_count: 0,
            highest_score: String::new(),
            baking_time: "00:00:00".to_string(),
            error: None,
        }
    }
}

impl ScreenModel {
    pub fn answer(&self, label: OptionLabel) -> &AnswerButton {
        &self.answers[&label]
    }

    fn answer_mut(&mut self, label: OptionLabel) -> &mut AnswerButton {
        self.answers.entry(label).or_default()
    }
}

impl QuizSurface for ScreenModel {
    fn set_question_text(&mut self, text: &str) {
        self.question = text.to_string();
        self.status = None;
    }

    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }

    fn set_option_text(&mut self, label: OptionLabel, text: &str) {
        self.answer_mut(label).text = text.to_string();
    }

    fn set_option_enabled(&mut self, label: OptionLabel, enabled: bool) {
        self.answer_mut(label).enabled = enabled;
    }

    fn set_option_highlight(&mut self, label: OptionLabel, highlight: Highlight) {
        self.answer_mut(label).highlight = highlight;
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    fn set_stopwatch(&mut self, text: &str) {
        self.stopwatch = text.to_string();
    }

    fn set_response_time(&mut self, text: &str) {
        self.response_time = text.to_string();
    }

    fn set_trivia(&mut self, trivia: Option<&str>) {
        self.trivia = trivia.map(str::to_string);
    }

    fn set_pause_control(&mut self, visible: bool, label: &str) {
        self.pause_visible = visible;
        self.pause_label = label.to_string();
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    fn set_counters(&mut self, correct: u32, incorrect: u32) {
        self.correct_count = correct;
        self.incorrect_count = incorrect;
    }

    fn set_highest_score(&mut self, text: &str) {
        self.highest_score = text.to_string();
    }

    fn set_baking_time(&mut self, text: &str) {
        self.baking_time = text.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

pub fn waiting_text(attempt: u32, max_attempts: u32) -> String {
    if attempt <= 1 {
        WAITING_TEXT.to_string()
    } else {
        format!("{WAITING_TEXT} ({attempt}/{max_attempts})")
    }
}
