use super::*;

impl<S: QuizSurface> QuizController<S> {
    /// Guarda el récord si los aciertos de la sesión lo superan (el empate no cuenta).
    pub(crate) fn update_highest_score(&mut self) {
        let elapsed = self.baking.displayed_secs();
        if self.scores.save(self.counters.correct, elapsed) {
            log::info!(
                "New best: {} correct after {}",
                self.counters.correct,
                format_hms(elapsed)
            );
        }
        self.refresh_highest_score();
    }

    pub(crate) fn refresh_highest_score(&mut self) {
        let label = self.scores.label();
        self.surface.set_highest_score(&label);
    }
}
