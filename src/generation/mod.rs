pub mod gemini;
pub mod parse;
pub mod prompt;
mod source;

pub use gemini::GeminiClient;
pub use source::{GenerationContext, MAX_RETRY_WAIT, QuestionSource, RetryDecision, RetryPolicy};

use crate::error::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

/// Servicio remoto que devuelve texto (que puede llevar JSON dentro).
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError>;
}

#[cfg(test)]
pub(crate) mod testing;
