// Dobles de prueba compartidos por los tests del crate.

use super::{GenerationContext, GenerationRequest, QuestionSource, RetryPolicy, TextGenerator};
use crate::error::ServiceError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub(crate) const VALID_PAYLOAD: &str = r#"Here you go: {"question": "Ibu kota Jepang?", "options": {"A": "Osaka", "B": "Kyoto", "C": "Tokyo", "D": "Nagoya"}, "correct": "C", "trivia": "Tokyo dulu bernama Edo."}"#;

/// Devuelve respuestas en el orden dado; cuando se acaban repite la válida.
pub(crate) struct ScriptedGenerator {
    pub replies: RefCell<VecDeque<Result<String, ServiceError>>>,
    pub calls: Rc<RefCell<Vec<GenerationRequest>>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        self.calls.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(VALID_PAYLOAD.to_string()))
    }
}

pub(crate) fn source_with(generator: ScriptedGenerator) -> QuestionSource {
    QuestionSource::new(
        GenerationContext {
            generator: Box::new(generator),
            model: "test-model".into(),
            categories: vec!["Sains".into()],
        },
        RetryPolicy::default(),
    )
    .with_sleeper(|_| {})
}

