// SPDX-License-Identifier: MIT

//! Generic PID controller for closed-loop control.
//!
//! Works in `no_std` and does not allocate memory.
//!
//! The derivative term is computed on the measurement rather than the error,
//! so a step change in the setpoint does not kick the output. Do not
//! "simplify" this to derivative-on-error; the distinction is the point.

/// Discrete PID controller with tunable gains and output clamping.
///
/// Call [`reset`](Self::reset) before the first [`compute`](Self::compute),
/// and again whenever the loop resumes after being stopped; otherwise the
/// stale previous-measurement produces a derivative spike.
///
/// The integral accumulator is unbounded by default, matching tunings
/// developed against controllers without anti-windup: under sustained
/// saturation it winds up, and recovery overshoots once the error flips.
/// Callers can opt into an accumulator clamp with
/// [`with_integral_limit`](Self::with_integral_limit), watch
/// [`integral`](Self::integral), or [`reset`](Self::reset) after saturation
/// episodes.
pub struct Pid {
    /// Proportional gain
    kp: f32,
    /// Integral gain
    ki: f32,
    /// Derivative gain
    kd: f32,

    /// Integrator state
    integral: f32,
    /// Last process variable (for derivative term)
    prev_measurement: f32,

    /// Output clamp
    out_min: i16,
    out_max: i16,

    /// Optional integral anti-windup clamp (±limit)
    integral_limit: Option<f32>,
}

impl Pid {
    /// Create a PID controller with zero gains and ±255 output limits.
    ///
    /// Gains are supplied separately through
    /// [`set_tunings`](Self::set_tunings) so they can also be replaced live.
    pub fn new() -> Self {
        Self {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0,

            integral: 0.0,
            prev_measurement: 0.0,

            out_min: -255,
            out_max: 255,

            integral_limit: None,
        }
    }

    /// Set output limits.
    pub fn with_output_limits(mut self, min: i16, max: i16) -> Self {
        debug_assert!(min <= max);
        self.out_min = min;
        self.out_max = max;
        self
    }

    /// Clamp the integral accumulator to ±`limit`.
    ///
    /// Off by default; see the type-level windup note.
    pub fn with_integral_limit(mut self, limit: f32) -> Self {
        self.integral_limit = Some(limit);
        self
    }

    /// Replace the gain coefficients.
    ///
    /// Accumulated state is kept, so this is safe to call mid-loop for live
    /// retuning; the new gains apply from the next `compute` onward.
    pub fn set_tunings(&mut self, kp: f32, ki: f32, kd: f32) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
    }

    /// Zero the integrator and seed the derivative history.
    ///
    /// `current_measurement` becomes the stored previous measurement, so the
    /// next `compute` sees no measurement motion and produces no derivative
    /// kick after a discontinuity (startup, re-enable, long pause).
    pub fn reset(&mut self, current_measurement: f32) {
        self.integral = 0.0;
        self.prev_measurement = current_measurement;
    }

    /// Current integral accumulator, for monitoring external windup policy.
    #[inline]
    pub fn integral(&self) -> f32 {
        self.integral
    }

    /// Run one controller update.
    ///
    /// `setpoint` — desired value
    /// `measurement` — current value
    /// `dt` — timestep in seconds (e.g. 0.02 for 50 Hz control loop)
    ///
    /// Returns the output truncated toward zero and clamped to the output
    /// limits. Positive output means drive toward increasing measurement.
    ///
    /// A `dt <= 0` (clock rollback, duplicate tick) yields 0 and mutates no
    /// state.
    pub fn compute(&mut self, setpoint: f32, measurement: f32, dt: f32) -> i16 {
        if dt <= 0.0 {
            return 0;
        }

        let error = setpoint - measurement;

        // ----- P term -----
        let p = self.kp * error;

        // ----- I term -----
        self.integral += error * dt;
        if let Some(limit) = self.integral_limit {
            self.integral = self.integral.clamp(-limit, limit);
        }
        let i = self.ki * self.integral;

        // ----- D term (on measurement, not error) -----
        let d_measurement = (measurement - self.prev_measurement) / dt;
        let d = -self.kd * d_measurement;

        self.prev_measurement = measurement;

        // ----- Output clamp -----
        let output = (p + i + d).clamp(self.out_min as f32, self.out_max as f32);
        output as i16
    }
}

impl Default for Pid {
    fn default() -> Self {
        Self::new()
    }
}
