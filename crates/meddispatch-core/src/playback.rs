//! Steppable replay cursor shared across all drone timelines.
//!
//! All transitions are synchronous and total; out-of-range requests clamp
//! rather than fail. The caller owns the timer that drives [`Playback::tick`],
//! keeping at most one pending tick per controller.

use crate::models::Point;
use crate::timeline::{DeliveryMarker, DroneTimeline};

pub const DEFAULT_CADENCE_MS: u64 = 700;
pub const DEFAULT_STEP_SIZE: usize = 1;

/// Playback state machine over a shared step cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    cursor: usize,
    playing: bool,
    cadence_ms: u64,
    step_size: usize,
    max_steps: usize,
}

impl Playback {
    pub fn new(max_steps: usize) -> Self {
        Self {
            cursor: 0,
            playing: false,
            cadence_ms: DEFAULT_CADENCE_MS,
            step_size: DEFAULT_STEP_SIZE,
            max_steps,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cadence_ms(&self) -> u64 {
        self.cadence_ms
    }

    pub fn step_size(&self) -> usize {
        self.step_size
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn set_cadence_ms(&mut self, cadence_ms: u64) {
        self.cadence_ms = cadence_ms.max(1);
    }

    pub fn set_step_size(&mut self, step_size: usize) {
        self.step_size = step_size.max(1);
    }

    /// Start auto-advance. Restarting from the end rewinds to step 0 first.
    pub fn play(&mut self) {
        if self.cursor >= self.max_steps {
            self.cursor = 0;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Manual step by a signed delta; clamps and interrupts auto-play.
    pub fn step_by(&mut self, delta: i64) {
        self.playing = false;
        let next = self.cursor as i64 + delta;
        self.cursor = next.clamp(0, self.max_steps as i64) as usize;
    }

    /// Jump to a step; clamps and interrupts auto-play.
    pub fn seek_to(&mut self, step: usize) {
        self.playing = false;
        self.cursor = step.min(self.max_steps);
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.cursor = 0;
    }

    pub fn fast_forward(&mut self) {
        self.playing = false;
        self.cursor = self.max_steps;
    }

    /// One auto-advance tick. Only acts while playing; reaching the end stops
    /// playback instead of scheduling another tick. Returns whether playback
    /// continues.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.cursor = (self.cursor + self.step_size).min(self.max_steps);
        if self.cursor >= self.max_steps {
            self.playing = false;
        }
        self.playing
    }

    /// Prefix of a timeline's path visible at the current cursor.
    pub fn visible_path<'a>(&self, timeline: &'a DroneTimeline) -> &'a [Point] {
        &timeline.path[..self.cursor.min(timeline.path.len())]
    }

    /// Delivery markers whose reveal step has been reached. A marker becomes
    /// visible the instant the cursor reaches its step, not one step later.
    pub fn revealed_markers<'a>(
        &self,
        timeline: &'a DroneTimeline,
    ) -> impl Iterator<Item = &'a DeliveryMarker> {
        let cursor = self.cursor;
        timeline
            .delivery_markers
            .iter()
            .filter(move |marker| marker.reveal_step <= cursor)
    }
}
