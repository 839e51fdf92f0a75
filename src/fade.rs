//! Stepwise fades between two lamp states.

use log::debug;

use crate::lamp::Lamp;

/// An iterator over the frames of a fade between two lamp states.
///
/// Yields `steps + 1` frames: the frame at position 0, one per intermediate
/// step, and the frame at position 1. The caller decides the pacing; this
/// type only computes the frame values.
///
/// # Examples
///
/// ```
/// use lamp_fade_rs::{Fade, Lamp};
///
/// let from = Lamp::new(0, 100, 0, true);
/// let to = Lamp::new(120, 100, 100, true);
/// let frames: Vec<Lamp> = Fade::new(from, to, 4).collect();
///
/// assert_eq!(frames.len(), 5);
/// assert_eq!(frames[2].hue, 60);
/// assert_eq!(frames[4].brightness, 100);
/// ```
#[derive(Debug, Clone)]
pub struct Fade {
    from: Lamp,
    to: Lamp,
    steps: u32,
    cursor: u32,
}

impl Fade {
    /// Create a fade from `from` to `to` over the given number of steps.
    ///
    /// With `steps == 0` the fade collapses to a single frame at position 1.
    pub fn new(from: Lamp, to: Lamp, steps: u32) -> Self {
        debug!("fading {:?} -> {:?} over {} steps", from, to, steps);
        Self {
            from,
            to,
            steps,
            cursor: 0,
        }
    }
}

impl Iterator for Fade {
    type Item = Lamp;

    fn next(&mut self) -> Option<Lamp> {
        if self.cursor > self.steps {
            return None;
        }
        let position = if self.steps == 0 {
            1.0
        } else {
            self.cursor as f64 / self.steps as f64
        };
        self.cursor += 1;
        Some(self.from.blend(&self.to, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.cursor.min(self.steps)) as usize
            + usize::from(self.cursor <= self.steps);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fade {}
