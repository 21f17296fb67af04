//! Damped-spring integrator.
//!
//! A `Spring` drives one scalar toward a target with oscillation controlled
//! by stiffness (pull strength) and damping (resistance). Pointer events move
//! the *target*; the displayed value only changes through `step`, which the
//! host calls on its animation clock. Integration is sub-stepped at a fixed
//! internal timestep so the result does not depend on how the host slices
//! frame time.
//!
//! # Example
//!
//! ```ignore
//! use tiltcard::motion::Spring;
//!
//! let mut spring = Spring::new(0.0, 150.0, 18.0);
//! spring.set_target(5.0);
//! spring.step(1.0 / 60.0); // one frame
//! assert!(spring.position() > 0.0);
//! ```

/// Internal integration step (seconds). Frame deltas are sliced into
/// sub-steps no larger than this.
const SPRING_SUBSTEP: f32 = 1.0 / 240.0;

/// Position threshold below which a spring may come to rest.
const REST_DELTA: f32 = 0.01;

/// Velocity threshold below which a spring may come to rest.
const REST_SPEED: f32 = 0.01;

// =============================================================================
// Spring
// =============================================================================

/// A critically/under-damped oscillator chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`.
    pub fn new(initial: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            stiffness,
            damping,
        }
    }

    /// Current displayed value.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the target. The displayed value is untouched; it catches up
    /// through subsequent `step` calls.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump directly to a value, killing any in-flight motion.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has come to rest exactly on its target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Semi-implicit Euler, sub-stepped at the fixed internal timestep. Once
    /// position and velocity fall inside the rest thresholds the spring snaps onto the
    /// target, so a released card returns to exact neutral rather than
    /// asymptotically near it.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let accel =
                self.stiffness * (self.target - self.position) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
