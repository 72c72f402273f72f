use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Etiquetas fijas de las cuatro opciones.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }

    /// Acepta " a", "B ", etc. El modelo no siempre respeta mayúsculas.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(OptionLabel::A),
            "B" => Some(OptionLabel::B),
            "C" => Some(OptionLabel::C),
            "D" => Some(OptionLabel::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pregunta ya validada: siempre tiene las cuatro opciones y `correct` es una de ellas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: BTreeMap<OptionLabel, String>,
    pub correct: OptionLabel,
    pub trivia: String,
}

impl Question {
    pub fn option_text(&self, label: OptionLabel) -> &str {
        self.options.get(&label).map(String::as_str).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingAnswer,
    Answered,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Correct,
    Incorrect,
    TimedOut,
}

#[derive(Clone, Debug)]
pub struct RoundState {
    pub id: RoundId,
    pub question: Question,
    pub status: RoundStatus,
    pub chosen: Option<OptionLabel>,
    pub response_time: Option<Duration>,
}

impl RoundState {
    pub fn new(id: RoundId, question: Question) -> Self {
        Self {
            id,
            question,
            status: RoundStatus::AwaitingAnswer,
            chosen: None,
            response_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == RoundStatus::AwaitingAnswer
    }
}

/// Récord persistido en `quiz_score.json`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    #[serde(rename = "highest_score", default)]
    pub best_score: u32,
    #[serde(rename = "longest_baking_time", default)]
    pub best_elapsed_secs: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionCounters {
    pub correct: u32,
    pub incorrect: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppState {
    Loading,
    AwaitingAnswer,
    Resolved(Resolution),
    Failed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_parse_is_lenient_about_case_and_spaces() {
        assert_eq!(OptionLabel::parse(" c "), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse("D"), Some(OptionLabel::D));
        assert_eq!(OptionLabel::parse("E"), None);
        assert_eq!(OptionLabel::parse("AB"), None);
    }

    #[test]
    fn score_record_uses_file_field_names() {
        let record = ScoreRecord {
            best_score: 7,
            best_elapsed_secs: 125,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["highest_score"], 7);
        assert_eq!(json["longest_baking_time"], 125);

        let partial: ScoreRecord = serde_json::from_str(r#"{"highest_score": 3}"#).unwrap();
        assert_eq!(partial.best_elapsed_secs, 0);
    }
}
