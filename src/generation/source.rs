// src/generation/source.rs

use super::parse::parse_question;
use super::prompt::{SYSTEM_INSTRUCTION, question_prompt};
use super::{GenerationRequest, TextGenerator};
use crate::data::default_categories;
use crate::error::{AttemptError, GenerationError};
use crate::model::Question;
use rand::seq::SliceRandom;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Tope de una espera entre intentos, sea cual sea `retry_delay`.
pub const MAX_RETRY_WAIT: Duration = Duration::from_secs(60 * 60);

/// Cliente de generación y su configuración, pasados explícitamente.
pub struct GenerationContext {
    pub generator: Box<dyn TextGenerator>,
    pub model: String,
    pub categories: Vec<String>,
}

#[derive(Debug)]
pub enum RetryDecision {
    RetryAfter(Duration),
    GiveUp(GenerationError),
}

/// Presupuesto de intentos compartido por todos los fallos reintentables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Qué hacer tras fallar el intento número `attempt` (empieza en 1).
    pub fn after_failure(&self, attempt: u32, error: AttemptError) -> RetryDecision {
        match error {
            AttemptError::Service(e) if !e.is_transient() => {
                RetryDecision::GiveUp(GenerationError::Service(e))
            }
            error => {
                let wait = match &error {
                    AttemptError::Service(_) => self.retry_delay.saturating_mul(attempt),
                    AttemptError::Malformed(_) => self.retry_delay,
                };
                if attempt >= self.max_attempts {
                    return RetryDecision::GiveUp(GenerationError::Exhausted {
                        attempts: attempt,
                        last: error.to_string(),
                    });
                }
                RetryDecision::RetryAfter(wait.min(MAX_RETRY_WAIT))
            }
        }
    }
}

pub struct QuestionSource {
    context: GenerationContext,
    policy: RetryPolicy,
    sleep: Box<dyn Fn(Duration)>,
}

impl QuestionSource {
    pub fn new(context: GenerationContext, policy: RetryPolicy) -> Self {
        Self {
            context,
            policy,
            sleep: Box::new(std::thread::sleep),
        }
    }

    pub fn with_sleeper(mut self, sleep: impl Fn(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn pick_category(&self) -> String {
        let mut rng = rand::thread_rng();
        match self.context.categories.choose(&mut rng) {
            Some(category) => category.clone(),
            None => default_categories()
                .choose(&mut rng)
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub fn build_request(&self) -> GenerationRequest {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let category = self.pick_category();
        log::debug!("Requesting a question for category {category}");
        GenerationRequest {
            model: self.context.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: question_prompt(&category, timestamp),
        }
    }

    /// Un único intento, sin reintentos.
    pub fn attempt(&self) -> Result<Question, AttemptError> {
        let request = self.build_request();
        let text = self.context.generator.generate(&request)?;
        Ok(parse_question(&text)?)
    }

    /// Bucle completo de reintentos. `on_attempt(n, max)` se llama antes de cada intento.
    pub fn fetch(&self, on_attempt: &mut dyn FnMut(u32, u32)) -> Result<Question, GenerationError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            on_attempt(attempt, self.policy.max_attempts);
            let error = match self.attempt() {
                Ok(question) => return Ok(question),
                Err(e) => e,
            };
            log::warn!("Question attempt {attempt}/{} failed: {error}", self.policy.max_attempts);
            match self.policy.after_failure(attempt, error) {
                RetryDecision::RetryAfter(wait) => {
                    log::info!("Retrying in {:.1}s", wait.as_secs_f64());
                    (self.sleep)(wait);
                }
                RetryDecision::GiveUp(fatal) => {
                    log::error!("{fatal}");
                    return Err(fatal);
                }
            }
        }
    }
}
