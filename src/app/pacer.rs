//! Frame pacing
//!
//! Holds each loop iteration to a minimum frame duration and reports how long
//! the previous frame really took.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Millisecond clock with a blocking sleep
pub trait Clock {
    /// Milliseconds since the clock's origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Blocks the calling thread for roughly `ms` milliseconds
    fn sleep_ms(&self, ms: u64);
}

/// Monotonic clock whose origin is its creation time
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// How the pacer waits out the remainder of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingStrategy {
    /// Spin on the clock until the frame time has passed. Burns a core.
    BusyWait,
    /// Let the OS sleep for the remaining time
    #[default]
    Sleep,
}

/// Enforces a minimum interval between frame boundaries
#[derive(Debug)]
pub struct FramePacer<C: Clock = MonotonicClock> {
    clock: C,
    strategy: PacingStrategy,
    frame_target_ms: u64,
    /// Time of last frame, in clock milliseconds
    last_frame_ms: u64,
}

impl FramePacer<MonotonicClock> {
    /// Creates a pacer on the monotonic clock, starting now
    pub fn new(frame_target_ms: u64, strategy: PacingStrategy) -> Self {
        Self::with_clock(MonotonicClock::new(), frame_target_ms, strategy)
    }
}

impl<C: Clock> FramePacer<C> {
    /// Creates a pacer on a custom clock. The first frame is measured from
    /// the clock's origin.
    pub fn with_clock(clock: C, frame_target_ms: u64, strategy: PacingStrategy) -> Self {
        Self {
            clock,
            strategy,
            frame_target_ms,
            last_frame_ms: 0,
        }
    }

    /// Waits until the frame target has elapsed since the last frame, marks
    /// a new frame boundary and returns the elapsed time in seconds.
    ///
    /// Boundaries are whole clock milliseconds, so on a real clock two
    /// boundaries can be up to 1 ms closer than the target.
    pub fn wait_for_next_frame(&mut self) -> f32 {
        let deadline = self.last_frame_ms + self.frame_target_ms;

        match self.strategy {
            PacingStrategy::BusyWait => {
                while self.clock.now_ms() < deadline {
                    std::hint::spin_loop();
                }
            }
            PacingStrategy::Sleep => {
                let elapsed = self.clock.now_ms().saturating_sub(self.last_frame_ms);
                let remaining = self.frame_target_ms.saturating_sub(elapsed);
                if remaining > 0 {
                    self.clock.sleep_ms(remaining);
                }
                // Sleeps may return early; top up so the minimum still holds
                while self.clock.now_ms() < deadline {
                    std::hint::spin_loop();
                }
            }
        }

        let now = self.clock.now_ms();
        let delta_ms = now - self.last_frame_ms;
        self.last_frame_ms = now;

        trace!(delta_ms, "frame boundary");

        delta_ms as f32 / 1000.0
    }

    /// Time of last frame in clock milliseconds
    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    pub fn frame_target_ms(&self) -> u64 {
        self.frame_target_ms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Clock that only moves when slept on or ticked by polling
    struct ManualClock {
        now: Cell<u64>,
        /// Milliseconds added on every `now_ms` call
        poll_step: u64,
        slept: Cell<u64>,
    }

    impl ManualClock {
        fn new(start: u64, poll_step: u64) -> Self {
            Self {
                now: Cell::new(start),
                poll_step,
                slept: Cell::new(0),
            }
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            let now = self.now.get();
            self.now.set(now + self.poll_step);
            now
        }

        fn sleep_ms(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
            self.slept.set(self.slept.get() + ms);
        }
    }

    #[test]
    fn test_busy_wait_reaches_target() {
        let clock = ManualClock::new(0, 1);
        let mut pacer = FramePacer::with_clock(clock, 33, PacingStrategy::BusyWait);
        let delta = pacer.wait_for_next_frame();
        assert!(pacer.last_frame_ms() >= 33);
        assert_eq!(delta, pacer.last_frame_ms() as f32 / 1000.0);
        assert_eq!(pacer.clock().slept.get(), 0);
    }

    #[test]
    fn test_sleep_sleeps_only_the_remainder() {
        let clock = ManualClock::new(10, 0);
        let mut pacer = FramePacer::with_clock(clock, 33, PacingStrategy::Sleep);
        let delta = pacer.wait_for_next_frame();
        assert_eq!(pacer.clock().slept.get(), 23);
        assert_eq!(pacer.last_frame_ms(), 33);
        assert_eq!(delta, 0.033);
    }

    #[test]
    fn test_late_frame_does_not_wait() {
        let clock = ManualClock::new(50, 0);
        let mut pacer = FramePacer::with_clock(clock, 33, PacingStrategy::Sleep);
        let delta = pacer.wait_for_next_frame();
        assert_eq!(pacer.clock().slept.get(), 0);
        assert_eq!(delta, 0.05);
    }

    #[test]
    fn test_consecutive_frames_are_spaced_on_real_clock() {
        for strategy in [PacingStrategy::BusyWait, PacingStrategy::Sleep] {
            let mut pacer = FramePacer::new(20, strategy);
            let mut boundaries = Vec::new();
            for _ in 0..3 {
                let delta = pacer.wait_for_next_frame();
                assert!(delta >= 0.020, "{strategy:?} delta {delta} under target");
                boundaries.push(Instant::now());
            }
            // Millisecond clock: each boundary may sit up to 1 ms past its tick
            for pair in boundaries.windows(2) {
                assert!(pair[1] - pair[0] >= Duration::from_millis(20 - 1));
            }
        }
    }
}
