// src/timer.rs
//
// Temporizadores como máquinas de estado explícitas. Ninguno lee el reloj por
// su cuenta: el bucle de eventos les pasa `now`.

use std::time::{Duration, Instant};

pub const COUNTDOWN_LIMIT: f64 = 10.0;
pub const COUNTDOWN_STEP: f64 = 0.1;
pub const COUNTDOWN_TICK: Duration = Duration::from_millis(100);
pub const STOPWATCH_SAMPLE: Duration = Duration::from_millis(10);
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(10);

/// Periodo fijo: dice cuántos periodos completos pasaron desde la última consulta.
#[derive(Clone, Debug)]
pub struct Interval {
    period: Duration,
    next_at: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next_at: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_at = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_at else {
            return 0;
        };
        let mut fired = 0;
        while next <= now {
            fired += 1;
            next += self.period;
        }
        self.next_at = Some(next);
        fired
    }

    /// Tiempo hasta el siguiente periodo, para pedir el repintado justo.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_at.map(|next| next.saturating_duration_since(now))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Idle,
    Running { percent: u8 },
    Expired,
}

/// Cuenta atrás de la pregunta: 10.0 unidades que bajan de 0.1 en 0.1.
///
/// Se lleva en ticks enteros para que 100 ticks la agoten exactamente.
#[derive(Clone, Debug)]
pub struct Countdown {
    limit: f64,
    total_ticks: u32,
    remaining_ticks: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(COUNTDOWN_LIMIT, COUNTDOWN_STEP)
    }
}

impl Countdown {
    pub fn new(limit: f64, step: f64) -> Self {
        let total_ticks = (limit / step).round().max(1.0) as u32;
        Self {
            limit,
            total_ticks,
            remaining_ticks: total_ticks,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.remaining_ticks = self.total_ticks;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.running = false;
            return CountdownTick::Expired;
        }
        CountdownTick::Running {
            percent: self.percentage(),
        }
    }

    pub fn remaining(&self) -> f64 {
        f64::from(self.remaining_ticks) * self.limit / f64::from(self.total_ticks)
    }

    pub fn percentage(&self) -> u8 {
        (u64::from(self.remaining_ticks) * 100 / u64::from(self.total_ticks)) as u8
    }
}

/// Temporizador de un solo disparo con pausa.
#[derive(Clone, Debug, Default)]
pub struct DelayTimer {
    deadline: Option<Instant>,
    paused_remaining: Option<Duration>,
}

impl DelayTimer {
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
        self.paused_remaining = None;
    }

    pub fn stop(&mut self) {
        self.deadline = None;
        self.paused_remaining = None;
    }

    /// Activo = armado o pausado.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some() || self.paused_remaining.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match (self.deadline, self.paused_remaining) {
            (_, Some(left)) => Some(left),
            (Some(deadline), None) => Some(deadline.saturating_duration_since(now)),
            (None, None) => None,
        }
    }

    pub fn pause(&mut self, now: Instant) -> Option<Duration> {
        let deadline = self.deadline.take()?;
        let left = deadline.saturating_duration_since(now);
        self.paused_remaining = Some(left);
        Some(left)
    }

    pub fn resume(&mut self, now: Instant) -> Option<Duration> {
        let left = self.paused_remaining.take()?;
        self.deadline = Some(now + left);
        Some(left)
    }

    /// `true` una sola vez, cuando vence.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Cronómetro de respuesta. Se muestrea cada 10ms y se congela en el último muestreo.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    last_sample: Duration,
}

impl Stopwatch {
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.last_sample = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn sample(&mut self, now: Instant) -> Duration {
        if let Some(start) = self.started_at {
            self.last_sample = now.saturating_duration_since(start);
        }
        self.last_sample
    }

    pub fn elapsed(&self) -> Duration {
        self.last_sample
    }

    pub fn stop(&mut self) -> Duration {
        self.started_at = None;
        self.last_sample
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.last_sample = Duration::ZERO;
    }
}

/// Reloj de la sesión ("baking time"), en segundos enteros.
#[derive(Clone, Debug)]
pub struct BakingClock {
    started_at: Instant,
    displayed_secs: u64,
}

impl BakingClock {
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            displayed_secs: 0,
        }
    }

    pub fn refresh(&mut self, now: Instant) -> u64 {
        self.displayed_secs = now.saturating_duration_since(self.started_at).as_secs();
        self.displayed_secs
    }

    pub fn displayed_secs(&self) -> u64 {
        self.displayed_secs
    }
}

pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

pub fn format_seconds(duration: Duration) -> String {
    format!("{:.3}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_expires_after_exactly_one_hundred_ticks() {
        let mut countdown = Countdown::default();
        countdown.start();
        for tick in 1..100 {
            let result = countdown.tick();
            assert!(matches!(result, CountdownTick::Running { .. }), "tick {tick}");
            if tick == 50 {
                assert_eq!(result, CountdownTick::Running { percent: 50 });
                assert!((countdown.remaining() - 5.0).abs() < 1e-9);
            }
        }
        assert_eq!(countdown.tick(), CountdownTick::Expired);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), CountdownTick::Idle);
    }

    #[test]
    fn countdown_remaining_uses_its_own_limit() {
        let mut countdown = Countdown::new(5.0, 0.1);
        countdown.start();
        assert!((countdown.remaining() - 5.0).abs() < 1e-9);
        for _ in 0..25 {
            countdown.tick();
        }
        assert!((countdown.remaining() - 2.5).abs() < 1e-9);
        assert_eq!(countdown.percentage(), 50);
    }

    #[test]
    fn stopped_countdown_never_expires() {
        let mut countdown = Countdown::default();
        countdown.start();
        countdown.tick();
        countdown.stop();
        for _ in 0..200 {
            assert_eq!(countdown.tick(), CountdownTick::Idle);
        }
    }

    #[test]
    fn pause_keeps_remaining_time_regardless_of_wall_clock() {
        let t0 = Instant::now();
        let mut delay = DelayTimer::default();
        delay.start(t0, AUTO_ADVANCE_DELAY);

        let paused = delay.pause(t0 + Duration::from_secs(3)).unwrap();
        assert_eq!(paused, Duration::from_secs(7));

        // Una hora en pausa no consume nada
        let later = t0 + Duration::from_secs(3600);
        assert!(!delay.poll(later));
        assert_eq!(delay.remaining(later), Some(Duration::from_secs(7)));

        assert_eq!(delay.resume(later), Some(Duration::from_secs(7)));
        assert!(!delay.poll(later + Duration::from_millis(6_999)));
        assert!(delay.poll(later + Duration::from_secs(7)));
        assert!(!delay.poll(later + Duration::from_secs(8)));
    }

    #[test]
    fn pause_without_active_delay_does_nothing() {
        let t0 = Instant::now();
        let mut delay = DelayTimer::default();
        assert_eq!(delay.pause(t0), None);
        assert_eq!(delay.resume(t0), None);
        assert!(!delay.is_active());
    }

    #[test]
    fn interval_reports_every_elapsed_period() {
        let t0 = Instant::now();
        let mut interval = Interval::new(COUNTDOWN_TICK);
        assert_eq!(interval.due(t0 + Duration::from_secs(1)), 0);
        interval.start(t0);
        assert_eq!(interval.due(t0 + Duration::from_millis(99)), 0);
        assert_eq!(interval.due(t0 + Duration::from_millis(350)), 3);
        assert_eq!(interval.due(t0 + Duration::from_millis(399)), 0);
        assert_eq!(interval.due(t0 + Duration::from_millis(400)), 1);
    }

    #[test]
    fn stopwatch_freezes_on_last_sample() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::default();
        watch.start(t0);
        watch.sample(t0 + Duration::from_millis(1_230));
        assert_eq!(watch.stop(), Duration::from_millis(1_230));
        watch.sample(t0 + Duration::from_secs(5));
        assert_eq!(watch.elapsed(), Duration::from_millis(1_230));
        assert_eq!(format_seconds(watch.elapsed()), "1.230s");
    }

    #[test]
    fn hms_formatting() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(3_725), "01:02:05");
        let t0 = Instant::now();
        let mut clock = BakingClock::new(t0);
        assert_eq!(clock.refresh(t0 + Duration::from_millis(61_900)), 61);
    }
}
