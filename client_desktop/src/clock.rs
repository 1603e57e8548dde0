//! Frame pacing

use std::time::{Duration, Instant};

/// Fixed-rate tick schedule for the game loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next_tick: now,
            frame_count: 0,
        }
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Record a frame run at `now` and schedule the next one.
    ///
    /// A late frame does not cause a burst of catch-up frames: if the schedule
    /// has fallen behind, it restarts from `now`.
    pub fn tick(&mut self, now: Instant) {
        self.frame_count += 1;
        self.next_tick += self.interval;
        if self.next_tick <= now {
            log::debug!("Frame {} late, resyncing clock", self.frame_count);
            self.next_tick = now + self.interval;
        }
    }
}

/// Block the event loop thread before exiting
pub fn wait(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let now = Instant::now();
        let clock = FrameClock::new(60, now);
        assert!(clock.is_due(now));
    }

    #[test]
    fn test_tick_schedules_one_interval_ahead() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        clock.tick(start);

        assert_eq!(clock.next_tick(), start + clock.interval);
        assert!(!clock.is_due(start + Duration::from_millis(10)));
        assert!(clock.is_due(start + Duration::from_millis(17)));
        assert_eq!(clock.frame_count, 1);
    }

    #[test]
    fn test_late_frame_resyncs_without_burst() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        clock.tick(start);

        let late = start + Duration::from_millis(200);
        clock.tick(late);

        assert_eq!(clock.next_tick(), late + clock.interval);
        assert!(!clock.is_due(late));
    }

    #[test]
    fn test_interval_for_60_fps() {
        let clock = FrameClock::new(60, Instant::now());
        assert_eq!(clock.interval.as_micros(), 16_666);
    }
}
