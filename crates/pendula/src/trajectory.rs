use uom::si::{
    f64::{Length, Time},
    time::second,
};

use crate::State;

/// Every state kept during a run, in step order.
///
/// Index `i` is the state at elapsed time `i * time_step`. This is also the
/// playback contract for a renderer: one frame per state, `time_step`
/// seconds apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
    time_step: f64,
}

/// Bob position at one step, for drawing.
///
/// The pivot is at the origin and `y` points up, so a hanging bob sits at
/// `(0, −L)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Elapsed time at this step.
    pub time: Time,
    /// Horizontal offset from the pivot.
    pub x: Length,
    /// Vertical offset from the pivot, negative below it.
    pub y: Length,
}

impl Trajectory {
    /// Wraps states produced with a fixed step of `time_step` seconds.
    #[must_use]
    pub fn new(states: Vec<State>, time_step: f64) -> Self {
        Self { states, time_step }
    }

    /// Returns the number of kept states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the kept states in step order.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the angle at every step (rad).
    pub fn angles(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.angle)
    }

    /// Returns the tangential velocity at every step (m/s).
    pub fn velocities(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.velocity)
    }

    /// Returns the fixed integration step.
    #[must_use]
    pub fn time_step(&self) -> Time {
        Time::new::<second>(self.time_step)
    }

    /// Returns the elapsed time at step `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, index: usize) -> Time {
        Time::new::<second>(index as f64 * self.time_step)
    }

    /// Returns `len() * time_step`, the time spanned by the kept states.
    ///
    /// After a period has been detected this is the measured period.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.time_at(self.len())
    }

    /// Returns the wall-clock delay between frames for a playback speed.
    ///
    /// A speed of `1.0` plays in real time, `0.5` at half speed.
    #[must_use]
    pub fn frame_interval(&self, speed: f64) -> Time {
        Time::new::<second>(self.time_step / speed)
    }

    /// Returns the bob position at every step for a rod of `length`.
    pub fn frames(&self, length: Length) -> impl ExactSizeIterator<Item = Frame> + '_ {
        self.states.iter().enumerate().map(move |(index, state)| Frame {
            time: self.time_at(index),
            x: length * state.angle.sin(),
            y: -(length * state.angle.cos()),
        })
    }

    /// Consumes the trajectory and returns its states.
    #[must_use]
    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}
