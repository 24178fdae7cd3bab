//! Frame pacer timing on the real clock

use std::time::Instant;

use crate::app::pacer::{FramePacer, PacingStrategy};
use crate::diagnostics::check::{Diagnostic, Finding};

/// Runs a few paced frames with each strategy and checks none came early
pub struct PacingCheck {
    frame_target_ms: u64,
    frames: u32,
}

impl PacingCheck {
    pub fn new(frame_target_ms: u64, frames: u32) -> Self {
        Self {
            frame_target_ms,
            frames,
        }
    }
}

impl Default for PacingCheck {
    fn default() -> Self {
        Self::new(10, 3)
    }
}

impl Diagnostic for PacingCheck {
    fn name(&self) -> &'static str {
        "Frame Pacing"
    }

    fn run(&self) -> Finding {
        let mut notes = Vec::new();
        let mut early = 0;
        let mut worst_overshoot_ms = 0.0_f64;

        for strategy in [PacingStrategy::BusyWait, PacingStrategy::Sleep] {
            let mut pacer = FramePacer::new(self.frame_target_ms, strategy);
            let started = Instant::now();
            let mut min_delta = f32::MAX;
            for _ in 0..self.frames {
                min_delta = min_delta.min(pacer.wait_for_next_frame());
            }
            let wall_ms = started.elapsed().as_secs_f64() * 1000.0;
            let expected_ms = (self.frame_target_ms * u64::from(self.frames)) as f64;

            if min_delta * 1000.0 < self.frame_target_ms as f32 {
                early += 1;
                notes.push(format!(
                    "✗ {:?}: a frame ended after {:.0} ms",
                    strategy,
                    min_delta * 1000.0
                ));
            } else {
                notes.push(format!(
                    "✓ {:?}: {} frames in {:.1} ms (target {} ms)",
                    strategy, self.frames, wall_ms, expected_ms
                ));
            }
            worst_overshoot_ms = worst_overshoot_ms.max(wall_ms - expected_ms);
        }

        if early > 0 {
            Finding::fail("Pacer returned before the frame target").with_notes(notes)
        } else if worst_overshoot_ms > (self.frame_target_ms * u64::from(self.frames)) as f64 {
            Finding::warn(format!("Frames overshoot by {:.1} ms", worst_overshoot_ms))
                .with_notes(notes)
        } else {
            Finding::pass("Frame target honoured").with_notes(notes)
        }
    }
}
