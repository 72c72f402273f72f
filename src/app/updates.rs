use super::*;
use crate::error::GenerationError;
use crate::generation::RetryDecision;

impl<S: QuizSurface> QuizController<S> {
    /// Un paso del bucle de eventos: avanza relojes y dispara lo que haya vencido.
    pub fn tick(&mut self, now: Instant) {
        if self.baking_ticks.due(now) > 0 {
            let secs = self.baking.refresh(now);
            self.surface.set_baking_time(&format_hms(secs));
        }

        match self.state {
            AppState::Loading => self.poll_loading(now),
            AppState::AwaitingAnswer => self.poll_round(now),
            AppState::Resolved(_) => {
                if self.delay.poll(now) {
                    log::debug!("Auto-advancing to the next question");
                    self.next_question();
                }
            }
            AppState::Failed(_) => {}
        }
    }

    /// Cuánto puede esperar la interfaz antes de volver a llamar a `tick`.
    pub fn next_wake(&self, now: Instant) -> Duration {
        let baking = self
            .baking_ticks
            .until_next(now)
            .unwrap_or(Duration::from_secs(1));
        match self.state {
            AppState::AwaitingAnswer => STOPWATCH_SAMPLE,
            AppState::Loading => match self.loading.and_then(|l| l.next_attempt_at) {
                Some(at) => at.saturating_duration_since(now).min(baking),
                None => Duration::ZERO,
            },
            AppState::Resolved(_) => match self.delay.remaining(now) {
                Some(left) if !self.delay.is_paused() => left.min(baking),
                _ => baking,
            },
            AppState::Failed(_) => baking,
        }
    }

    fn poll_round(&mut self, now: Instant) {
        if self.stopwatch_samples.due(now) > 0 {
            let elapsed = self.stopwatch.sample(now);
            self.surface.set_stopwatch(&format_seconds(elapsed));
        }

        for _ in 0..self.countdown_ticks.due(now) {
            match self.countdown.tick() {
                CountdownTick::Running { percent } => self.surface.set_progress(percent),
                CountdownTick::Expired => {
                    if let Some(id) = self.current_round_id() {
                        self.time_out(id, now);
                    }
                    break;
                }
                CountdownTick::Idle => break,
            }
        }
    }

    // Un intento por frame; las esperas entre intentos son plazos, no `sleep`.
    fn poll_loading(&mut self, now: Instant) {
        let Some(progress) = self.loading else {
            return;
        };
        match progress.next_attempt_at {
            // Primer frame en Loading: solo se pinta el mensaje de espera
            None => {
                self.loading = Some(LoadingProgress {
                    next_attempt_at: Some(now),
                    ..progress
                });
                return;
            }
            Some(at) if now < at => return,
            Some(_) => {}
        }

        let attempt = progress.attempt + 1;
        let max_attempts = self.source.policy().max_attempts;
        self.surface.set_status(&waiting_text(attempt, max_attempts));

        let started = Instant::now();
        let result = self.source.attempt();
        let now = now + started.elapsed();

        match result {
            Ok(question) => {
                self.loading = None;
                self.begin_round(question, now);
            }
            Err(error) => {
                log::warn!("Question attempt {attempt}/{max_attempts} failed: {error}");
                match self.source.policy().after_failure(attempt, error) {
                    RetryDecision::RetryAfter(wait) => {
                        log::info!("Retrying in {:.1}s", wait.as_secs_f64());
                        self.surface.set_status(&waiting_text(attempt + 1, max_attempts));
                        self.loading = Some(LoadingProgress {
                            attempt,
                            next_attempt_at: Some(now.checked_add(wait).unwrap_or(now)),
                        });
                    }
                    RetryDecision::GiveUp(fatal) => self.fail(fatal),
                }
            }
        }
    }

    fn fail(&mut self, error: GenerationError) {
        let message = error.to_string();
        log::error!("{message}");
        self.loading = None;
        self.round = None;
        self.surface.show_error(&message);
        self.state = AppState::Failed(message);
    }
}
