use crate::generation::QuestionSource;
use crate::model::{
    AppState, Highlight, OptionLabel, Question, Resolution, RoundId, RoundState, RoundStatus, ScoreRecord,
    SessionCounters,
};
use crate::score::ScoreStore;
use crate::timer::{
    BakingClock, Countdown, CountdownTick, DelayTimer, Interval, Stopwatch, AUTO_ADVANCE_DELAY, COUNTDOWN_TICK,
    STOPWATCH_SAMPLE, format_hms, format_seconds,
};
use crate::view_models::{PAUSE_TEXT, QuizSurface, RESUME_TEXT, TIMEOUT_TEXT, WAITING_TEXT, waiting_text};
use std::time::{Duration, Instant};

// Submódulos
pub mod actions;
pub mod progress;
pub mod updates;


/// Intento de generación en curso. `next_attempt_at == None`: aún no se ha pintado la espera.
#[derive(Clone, Copy, Debug)]
struct LoadingProgress {
    attempt: u32,
    next_attempt_at: Option<Instant>,
}

/// Orquesta las rondas: pedir pregunta, presentar, resolver, puntuar y pasar a la siguiente.
pub struct QuizController<S: QuizSurface> {
    surface: S,
    source: QuestionSource,
    scores: ScoreStore,
    state: AppState,
    round: Option<RoundState>,
    last_round_id: u64,
    counters: SessionCounters,
    loading: Option<LoadingProgress>,
    countdown: Countdown,
    countdown_ticks: Interval,
    stopwatch: Stopwatch,
    stopwatch_samples: Interval,
    delay: DelayTimer,
    baking: BakingClock,
    baking_ticks: Interval,
}

impl<S: QuizSurface> QuizController<S> {
    /// Carga el récord y deja pedida la primera pregunta.
    pub fn new(surface: S, source: QuestionSource, mut scores: ScoreStore, now: Instant) -> Self {
        scores.load();

        let mut controller = Self {
            surface,
            source,
            scores,
            state: AppState::Loading,
            round: None,
            last_round_id: 0,
            counters: SessionCounters::default(),
            loading: None,
            countdown: Countdown::default(),
            countdown_ticks: Interval::new(COUNTDOWN_TICK),
            stopwatch: Stopwatch::default(),
            stopwatch_samples: Interval::new(STOPWATCH_SAMPLE),
            delay: DelayTimer::default(),
            baking: BakingClock::new(now),
            baking_ticks: Interval::new(Duration::from_secs(1)),
        };

        controller.baking_ticks.start(now);
        controller.surface.set_baking_time(&format_hms(0));
        controller.surface.set_counters(0, 0);
        controller.refresh_highest_score();
        controller.next_question();
        controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn current_round_id(&self) -> Option<RoundId> {
        self.round.as_ref().map(|r| r.id)
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    pub fn score_record(&self) -> ScoreRecord {
        self.scores.record()
    }

    pub fn is_paused(&self) -> bool {
        self.delay.is_paused()
    }

    pub fn delay_remaining(&self, now: Instant) -> Option<Duration> {
        self.delay.remaining(now)
    }

    pub fn baking_secs(&self) -> u64 {
        self.baking.displayed_secs()
    }
}
