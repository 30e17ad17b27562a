//! Decorative frames shown while a check is "rolling".
//!
//! The schedule is purely presentational. The committed roll is drawn
//! separately and never depends on the frames.

use std::time::Duration;

use rand::Rng;

use super::roll_d20;

/// One animation frame: a face to display and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFrame {
    /// The d20 face shown.
    pub face: u32,
    /// How long the face stays on screen.
    pub delay: Duration,
}

/// Timing of a dice reveal.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    /// Number of spinning frames.
    pub frames: u32,
    /// Delay of the first frame.
    pub base_delay: Duration,
    /// Extra delay added per subsequent frame.
    pub step: Duration,
    /// Pause between the last frame and the outcome banner.
    pub settle: Duration,
    /// How long the outcome stays visible before the scene changes.
    pub hold: Duration,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            frames: 20,
            base_delay: Duration::from_millis(50),
            step: Duration::from_millis(10),
            settle: Duration::from_millis(300),
            hold: Duration::from_millis(2000),
        }
    }
}

impl RevealSchedule {
    /// A schedule with no frames and no pauses.
    pub fn instant() -> Self {
        Self {
            frames: 0,
            base_delay: Duration::ZERO,
            step: Duration::ZERO,
            settle: Duration::ZERO,
            hold: Duration::ZERO,
        }
    }

    /// Generate the spinning frames, slowing down as they go.
    pub fn frames<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<RevealFrame> {
        (0..self.frames)
            .map(|i| RevealFrame {
                face: roll_d20(rng),
                delay: self.base_delay + self.step * i,
            })
            .collect()
    }

    /// Total time the reveal takes, frames plus settle and hold.
    pub fn total_duration(&self) -> Duration {
        let spin: Duration = (0..self.frames)
            .map(|i| self.base_delay + self.step * i)
            .sum();
        spin + self.settle + self.hold
    }
}
