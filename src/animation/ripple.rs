//! Ripple animation state for click feedback.
//!
//! A run grows the ripple diameter linearly from 0 to twice the widget width
//! in a fixed number of equal steps. The tick that reaches the target is kept
//! for one frame so the full circle gets painted; the next tick resets the
//! diameter to 0 and ends the run.

/// Lifecycle of a ripple run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RipplePhase {
    /// No ripple has run yet, or the last one was cancelled
    #[default]
    Idle,
    /// Growing toward the target diameter
    Running,
    /// The last run completed
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct Ripple {
    /// Center of the ripple in local widget coordinates
    center: (f32, f32),
    /// Current diameter, always in `[0, target]`
    progress: f32,
    target: f32,
    step: f32,
    steps_taken: u32,
    step_count: u32,
    phase: RipplePhase,
}

impl Ripple {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run centered at `center`, targeting twice `width`.
    ///
    /// Any run in progress is discarded. Returns true if the ripple needs
    /// ticking; a zero-width widget finishes immediately.
    pub fn start(&mut self, center: (f32, f32), width: f32, step_count: u32) -> bool {
        let step_count = step_count.max(1);
        let start = 0.0_f32;

        self.center = center;
        self.progress = start;
        self.target = (width * 2.0).max(0.0);
        self.step = (self.target - start).abs() / step_count as f32;
        self.steps_taken = 0;
        self.step_count = step_count;

        if self.target > 0.0 {
            self.phase = RipplePhase::Running;
            true
        } else {
            self.phase = RipplePhase::Finished;
            false
        }
    }

    /// Advance one tick, returns true if still animating.
    pub fn advance(&mut self) -> bool {
        if self.phase != RipplePhase::Running {
            return false;
        }

        if self.progress >= self.target {
            self.progress = 0.0;
            self.phase = RipplePhase::Finished;
            return false;
        }

        self.steps_taken += 1;
        // Multiply instead of accumulating so the last step lands exactly on target
        self.progress = if self.steps_taken >= self.step_count {
            self.target
        } else {
            (self.step * self.steps_taken as f32).min(self.target)
        };
        true
    }

    /// Cancel the current run and hide the ripple.
    pub fn cancel(&mut self) {
        self.progress = 0.0;
        self.steps_taken = 0;
        self.phase = RipplePhase::Idle;
    }

    pub fn phase(&self) -> RipplePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RipplePhase::Running
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// Current diameter of the ripple circle
    pub fn diameter(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Diameter gained per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of increments taken in the current run
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }
}
