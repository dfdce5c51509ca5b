use std::time::{Duration, Instant};

use super::types::Mark;

/// Whose turn it is and when that turn began.
#[derive(Debug, Clone, Copy)]
pub struct TurnController {
    current: Mark,
    turn_started_at: Instant,
}

impl TurnController {
    pub fn new(now: Instant) -> Self {
        Self {
            current: Mark::X,
            turn_started_at: now,
        }
    }

    pub fn current(&self) -> Mark {
        self.current
    }

    pub fn turn_started_at(&self) -> Instant {
        self.turn_started_at
    }

    pub fn start_turn(&mut self, mark: Mark, now: Instant) {
        debug_assert!(mark != Mark::Empty, "a turn belongs to X or O");
        self.current = mark;
        self.turn_started_at = now;
    }

    /// Hands the turn to the other mark and restarts the clock.
    pub fn advance(&mut self, now: Instant) {
        let next = self.current.opponent().unwrap_or(Mark::X);
        self.start_turn(next, now);
    }

    pub fn elapsed_seconds(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.turn_started_at).as_secs_f64()
    }

    pub fn has_timed_out(&self, now: Instant, limit: Duration) -> bool {
        self.elapsed_seconds(now) > limit.as_secs_f64()
    }

    pub fn remaining_seconds(&self, now: Instant, limit: Duration) -> f64 {
        (limit.as_secs_f64() - self.elapsed_seconds(now)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: Duration = Duration::from_secs(10);

    #[test]
    fn test_first_turn_belongs_to_x() {
        let turns = TurnController::new(Instant::now());

        assert_eq!(turns.current(), Mark::X);
    }

    #[test]
    fn test_advance_alternates_and_resets_clock() {
        let t0 = Instant::now();
        let mut turns = TurnController::new(t0);

        let t1 = t0 + Duration::from_secs(3);
        turns.advance(t1);
        assert_eq!(turns.current(), Mark::O);
        assert_eq!(turns.turn_started_at(), t1);

        turns.advance(t1 + Duration::from_secs(1));
        assert_eq!(turns.current(), Mark::X);
    }

    #[test]
    fn test_elapsed_and_remaining() {
        let t0 = Instant::now();
        let turns = TurnController::new(t0);
        let now = t0 + Duration::from_millis(2500);

        assert!((turns.elapsed_seconds(now) - 2.5).abs() < 1e-9);
        assert!((turns.remaining_seconds(now, LIMIT) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_remaining_is_clamped_at_zero() {
        let t0 = Instant::now();
        let turns = TurnController::new(t0);

        assert_eq!(turns.remaining_seconds(t0 + Duration::from_secs(30), LIMIT), 0.0);
    }

    #[test]
    fn test_timeout_is_strictly_after_limit() {
        let t0 = Instant::now();
        let turns = TurnController::new(t0);

        assert!(!turns.has_timed_out(t0 + LIMIT, LIMIT));
        assert!(turns.has_timed_out(t0 + Duration::from_millis(10_100), LIMIT));
    }

    #[test]
    fn test_clock_before_turn_start_counts_as_zero() {
        let t0 = Instant::now();
        let mut turns = TurnController::new(t0);
        turns.start_turn(Mark::O, t0 + Duration::from_secs(5));

        assert_eq!(turns.elapsed_seconds(t0), 0.0);
    }
}
