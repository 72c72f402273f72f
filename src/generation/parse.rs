// src/generation/parse.rs
//
// El modelo devuelve texto libre; aquí se saca el objeto JSON y se valida.

use crate::error::MalformedResponse;
use crate::model::{OptionLabel, Question};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const DEFAULT_TRIVIA: &str = "Fakta menarik tidak tersedia untuk jawaban ini.";

const REQUIRED_KEYS: [&str; 3] = ["question", "options", "correct"];

/// Devuelve el texto entre el primer `{` y el último `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

pub fn parse_question(text: &str) -> Result<Question, MalformedResponse> {
    let json = extract_json_object(text).ok_or(MalformedResponse::NoJsonObject)?;
    let value: Value =
        serde_json::from_str(json).map_err(|e| MalformedResponse::InvalidJson(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(MalformedResponse::InvalidJson("top-level value is not an object".into()));
    };
    validate(fields)
}

fn validate(fields: Map<String, Value>) -> Result<Question, MalformedResponse> {
    let mut missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|k| !fields.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    if !missing.is_empty() {
        if !fields.contains_key("trivia") {
            missing.push("trivia".to_string());
        }
        return Err(MalformedResponse::MissingKeys(missing));
    }

    let text = string_field(&fields, "question")?;
    let options = parse_options(&fields["options"])?;

    let correct_raw = string_field(&fields, "correct")?;
    let correct = OptionLabel::parse(&correct_raw)
        .filter(|label| options.contains_key(label))
        .ok_or(MalformedResponse::UnknownCorrectLabel(correct_raw))?;

    // Si solo falta la curiosidad, se pone una por defecto en vez de reintentar
    let trivia = match fields.get("trivia") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => DEFAULT_TRIVIA.to_string(),
    };

    Ok(Question {
        text,
        options,
        correct,
        trivia,
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, MalformedResponse> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(MalformedResponse::MissingKeys(vec![key.to_string()])),
    }
}

fn parse_options(value: &Value) -> Result<BTreeMap<OptionLabel, String>, MalformedResponse> {
    let Value::Object(raw) = value else {
        return Err(MalformedResponse::InvalidOptions("options is not an object".into()));
    };

    let mut options = BTreeMap::new();
    for (key, text) in raw {
        let label = OptionLabel::parse(key)
            .ok_or_else(|| MalformedResponse::InvalidOptions(format!("unexpected label {key:?}")))?;
        let text = option_text(text)
            .ok_or_else(|| MalformedResponse::InvalidOptions(format!("option {key} has no text")))?;
        if options.insert(label, text).is_some() {
            return Err(MalformedResponse::InvalidOptions(format!("duplicate label {label}")));
        }
    }

    if options.len() != OptionLabel::ALL.len() {
        return Err(MalformedResponse::InvalidOptions(format!(
            "expected 4 options, got {}",
            options.len()
        )));
    }
    Ok(options)
}

// Años o cantidades llegan a veces como números
fn option_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "question": "Planet terbesar di tata surya?",
        "options": {"A": "Mars", "B": "Jupiter", "C": "Bumi", "D": "Venus"},
        "correct": "B",
        "trivia": "Jupiter bisa memuat lebih dari 1.300 Bumi."
    }"#;

    #[test]
    fn extracts_object_wrapped_in_prose_and_fences() {
        let text = format!("Tentu! Berikut pertanyaannya:\n```json\n{VALID}\n```\nSelamat bermain.");
        let question = parse_question(&text).unwrap();
        assert_eq!(question.correct, OptionLabel::B);
        assert_eq!(question.option_text(OptionLabel::B), "Jupiter");
        assert_eq!(question.options.len(), 4);
    }

    #[test]
    fn text_without_braces_is_malformed() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
        assert_eq!(
            parse_question("sorry, I can't help"),
            Err(MalformedResponse::NoJsonObject)
        );
    }

    #[test]
    fn broken_json_is_malformed() {
        let err = parse_question(r#"{"question": "x", "options": }"#).unwrap_err();
        assert!(matches!(err, MalformedResponse::InvalidJson(_)));
    }

    #[test]
    fn missing_trivia_gets_a_default() {
        let text = r#"{"question": "2+2?", "options": {"A": "3", "B": "4", "C": "5", "D": "22"}, "correct": "b"}"#;
        let question = parse_question(text).unwrap();
        assert_eq!(question.trivia, DEFAULT_TRIVIA);
        assert_eq!(question.correct, OptionLabel::B);
    }

    #[test]
    fn missing_correct_is_rejected() {
        let text = r#"{"question": "2+2?", "options": {"A": "3", "B": "4", "C": "5", "D": "22"}, "trivia": "t"}"#;
        assert_eq!(
            parse_question(text),
            Err(MalformedResponse::MissingKeys(vec!["correct".into()]))
        );
    }

    #[test]
    fn correct_label_must_be_an_option() {
        let text = r#"{"question": "q", "options": {"A": "1", "B": "2", "C": "3", "D": "4"}, "correct": "E", "trivia": "t"}"#;
        assert_eq!(
            parse_question(text),
            Err(MalformedResponse::UnknownCorrectLabel("E".into()))
        );
    }

    #[test]
    fn exactly_four_options_are_required() {
        let three = r#"{"question": "q", "options": {"A": "1", "B": "2", "C": "3"}, "correct": "A", "trivia": "t"}"#;
        assert!(matches!(
            parse_question(three),
            Err(MalformedResponse::InvalidOptions(_))
        ));

        let fifth = r#"{"question": "q", "options": {"A": "1", "B": "2", "C": "3", "D": "4", "E": "5"}, "correct": "A", "trivia": "t"}"#;
        assert!(matches!(
            parse_question(fifth),
            Err(MalformedResponse::InvalidOptions(_))
        ));
    }

    #[test]
    fn numeric_options_are_accepted_as_text() {
        let text = r#"{"question": "Tahun kemerdekaan Indonesia?", "options": {"A": 1945, "B": 1949, "C": 1942, "D": 1950}, "correct": "A", "trivia": "t"}"#;
        let question = parse_question(text).unwrap();
        assert_eq!(question.option_text(OptionLabel::A), "1945");
        assert_eq!(question.option_text(OptionLabel::D), "1950");
    }

    #[test]
    fn null_or_nested_options_are_rejected() {
        let null = r#"{"question": "q", "options": {"A": null, "B": "2", "C": "3", "D": "4"}, "correct": "B", "trivia": "t"}"#;
        assert!(matches!(
            parse_question(null),
            Err(MalformedResponse::InvalidOptions(_))
        ));

        let nested = r#"{"question": "q", "options": {"A": ["1"], "B": "2", "C": "3", "D": "  "}, "correct": "B", "trivia": "t"}"#;
        assert!(matches!(
            parse_question(nested),
            Err(MalformedResponse::InvalidOptions(_))
        ));
    }
}
