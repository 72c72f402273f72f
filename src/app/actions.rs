use super::*;

impl<S: QuizSurface> QuizController<S> {
    /// Cancela todo lo de la ronda anterior y pasa a `Loading`.
    ///
    /// La generación no se hace aquí: la hace `tick` en el siguiente frame, así la
    /// interfaz llega a pintar el mensaje de espera antes de bloquearse.
    pub fn next_question(&mut self) {
        if matches!(self.state, AppState::Failed(_)) {
            return;
        }

        self.freeze_round_timers();
        self.delay.stop();
        self.stopwatch.reset();

        self.surface.set_trivia(None);
        self.surface.set_pause_control(false, PAUSE_TEXT);
        for label in OptionLabel::ALL {
            self.surface.set_option_highlight(label, Highlight::None);
            self.surface.set_option_enabled(label, false);
        }
        self.surface.set_next_enabled(false);
        self.surface.set_response_time("");
        self.surface.set_stopwatch(&format_seconds(Duration::ZERO));
        self.surface.set_progress(100);
        self.surface.set_status(WAITING_TEXT);

        self.round = None;
        self.state = AppState::Loading;
        self.loading = Some(LoadingProgress {
            attempt: 0,
            next_attempt_at: None,
        });
        log::debug!("Loading next question");
    }

    /// Botón "siguiente": se puede usar en cualquier momento salvo mientras se carga.
    pub fn advance(&mut self) {
        match self.state {
            AppState::Loading | AppState::Failed(_) => {
                log::debug!("Ignoring manual advance while {:?}", self.state);
            }
            _ => self.next_question(),
        }
    }

    pub(crate) fn begin_round(&mut self, question: Question, now: Instant) {
        self.last_round_id += 1;
        let id = RoundId(self.last_round_id);

        self.surface.set_question_text(&question.text);
        for label in OptionLabel::ALL {
            self.surface.set_option_text(label, question.option_text(label));
            self.surface.set_option_highlight(label, Highlight::None);
        }
        self.surface.set_all_options_enabled(true);
        self.surface.set_next_enabled(false);
        self.surface.set_progress(100);
        self.surface.set_stopwatch(&format_seconds(Duration::ZERO));

        self.countdown.start();
        self.countdown_ticks.start(now);
        self.stopwatch.start(now);
        self.stopwatch_samples.start(now);

        log::info!("Round {} started: {}", id.0, question.text);
        self.round = Some(RoundState::new(id, question));
        self.state = AppState::AwaitingAnswer;
    }

    /// El usuario elige una opción. Devuelve la resolución, o `None` si la ronda ya estaba cerrada.
    pub fn check_answer(&mut self, label: OptionLabel, now: Instant) -> Option<Resolution> {
        if !self.round.as_ref().is_some_and(RoundState::is_open) {
            log::debug!("Ignoring answer {label}: round already resolved");
            return None;
        }

        let response_time = self.freeze_round_timers();
        let round = self.round.as_mut()?;
        round.status = RoundStatus::Answered;
        round.chosen = Some(label);
        round.response_time = Some(response_time);
        let correct = round.question.correct;

        self.surface
            .set_response_time(&format!("Response time: {}", format_seconds(response_time)));
        self.surface.set_all_options_enabled(false);

        let resolution = if label == correct {
            self.surface.set_option_highlight(label, Highlight::Correct);
            self.counters.correct += 1;
            self.update_highest_score();
            Resolution::Correct
        } else {
            self.surface.set_option_highlight(label, Highlight::Wrong);
            self.surface.set_option_highlight(correct, Highlight::Correct);
            self.counters.incorrect += 1;
            Resolution::Incorrect
        };
        log::info!("Answered {label} ({resolution:?}) in {}", format_seconds(response_time));

        self.finish_round(resolution, now);
        Some(resolution)
    }

    /// Se acabó el tiempo. Solo actúa si `round` sigue siendo la ronda abierta.
    pub fn time_out(&mut self, round: RoundId, now: Instant) -> bool {
        if !self.round.as_ref().is_some_and(|r| r.id == round && r.is_open()) {
            log::debug!("Ignoring stale timeout for round {}", round.0);
            return false;
        }

        let response_time = self.freeze_round_timers();
        let Some(current) = self.round.as_mut() else {
            return false;
        };
        current.status = RoundStatus::TimedOut;
        current.response_time = Some(response_time);
        let correct = current.question.correct;

        self.surface.set_response_time(TIMEOUT_TEXT);
        self.surface.set_progress(0);
        self.surface.set_all_options_enabled(false);
        self.surface.set_option_highlight(correct, Highlight::Correct);
        self.counters.incorrect += 1;
        log::info!("Round {} timed out", round.0);

        self.finish_round(Resolution::TimedOut, now);
        true
    }

    /// Pausa o reanuda la espera antes de la siguiente pregunta.
    pub fn toggle_pause(&mut self, now: Instant) {
        if !matches!(self.state, AppState::Resolved(_)) || !self.delay.is_active() {
            return;
        }
        if self.delay.is_paused() {
            if let Some(left) = self.delay.resume(now) {
                log::debug!("Auto-advance resumed with {:?} left", left);
            }
            self.surface.set_pause_control(true, PAUSE_TEXT);
        } else {
            if let Some(left) = self.delay.pause(now) {
                log::debug!("Auto-advance paused with {:?} left", left);
            }
            self.surface.set_pause_control(true, RESUME_TEXT);
        }
    }

    fn finish_round(&mut self, resolution: Resolution, now: Instant) {
        self.surface.set_counters(self.counters.correct, self.counters.incorrect);
        if let Some(round) = &self.round {
            self.surface.set_trivia(Some(&round.question.trivia));
        }
        self.surface.set_pause_control(true, PAUSE_TEXT);
        self.surface.set_next_enabled(true);

        self.delay.start(now, AUTO_ADVANCE_DELAY);
        self.state = AppState::Resolved(resolution);
    }

    /// Para cuenta atrás y cronómetro; devuelve el último tiempo medido.
    fn freeze_round_timers(&mut self) -> Duration {
        self.countdown.stop();
        self.countdown_ticks.stop();
        self.stopwatch_samples.stop();
        self.stopwatch.stop()
    }
}
