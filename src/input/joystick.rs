//! Joystick input source.
//!
//! Covers both the on-screen virtual stick and a physical gamepad. The
//! horizontal axis moves, pushing it past `run_threshold` also runs, and a
//! button jumps.

use super::{ControlSample, InputSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickSource {
    /// Horizontal deflection in `[-1, 1]`, negative is left.
    axis_x: f32,
    jump_button: bool,
    run_button: bool,
    /// Deflection ignored as stick noise.
    pub deadzone: f32,
    /// Deflection at which walking becomes running.
    pub run_threshold: f32,
}

impl Default for JoystickSource {
    fn default() -> Self {
        Self::new(0.2, 0.8)
    }
}

impl JoystickSource {
    pub fn new(deadzone: f32, run_threshold: f32) -> Self {
        Self {
            axis_x: 0.0,
            jump_button: false,
            run_button: false,
            deadzone,
            run_threshold,
        }
    }

    /// Set the horizontal axis. Non-finite values read as centered and the
    /// rest is clamped to `[-1, 1]`.
    pub fn set_axis(&mut self, x: f32) {
        self.axis_x = if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 };
    }

    /// Set the axis from a virtual stick's knob offset and radius.
    pub fn set_knob(&mut self, dx: f32, radius: f32) {
        if radius > 0.0 {
            self.set_axis(dx / radius);
        } else {
            self.set_axis(0.0);
        }
    }

    pub fn axis(&self) -> f32 {
        self.axis_x
    }

    pub fn set_jump(&mut self, pressed: bool) {
        self.jump_button = pressed;
    }

    pub fn set_run(&mut self, pressed: bool) {
        self.run_button = pressed;
    }

    /// Stick released and buttons up.
    pub fn reset(&mut self) {
        self.axis_x = 0.0;
        self.jump_button = false;
        self.run_button = false;
    }
}

impl InputSource for JoystickSource {
    fn sample(&mut self) -> ControlSample {
        let x = self.axis_x;
        let deflected = x.abs() > self.deadzone;
        ControlSample {
            left: deflected && x < 0.0,
            right: deflected && x > 0.0,
            jump: self.jump_button,
            run: self.run_button || (deflected && x.abs() >= self.run_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_stick_is_no_input() {
        let mut js = JoystickSource::default();
        assert_eq!(js.sample(), ControlSample::NONE);
        js.set_axis(0.15);
        assert_eq!(js.sample(), ControlSample::NONE);
    }

    #[test]
    fn test_walk_and_run_by_deflection() {
        let mut js = JoystickSource::default();
        js.set_axis(-0.5);
        let s = js.sample();
        assert!(s.left && !s.right && !s.run);

        js.set_axis(0.9);
        let s = js.sample();
        assert!(s.right && s.run);
    }

    #[test]
    fn test_non_finite_axis_reads_centered() {
        let mut js = JoystickSource::default();
        js.set_axis(f32::NAN);
        assert_eq!(js.axis(), 0.0);
        js.set_axis(f32::NEG_INFINITY);
        assert_eq!(js.axis(), 0.0);
        assert_eq!(js.sample(), ControlSample::NONE);
    }

    #[test]
    fn test_axis_is_clamped() {
        let mut js = JoystickSource::default();
        js.set_axis(-4.0);
        assert_eq!(js.axis(), -1.0);
    }

    #[test]
    fn test_knob_offset_normalizes_by_radius() {
        let mut js = JoystickSource::default();
        js.set_knob(30.0, 60.0);
        assert_eq!(js.axis(), 0.5);
        js.set_knob(30.0, 0.0);
        assert_eq!(js.axis(), 0.0);
    }

    #[test]
    fn test_buttons() {
        let mut js = JoystickSource::default();
        js.set_jump(true);
        js.set_run(true);
        let s = js.sample();
        assert!(s.jump && s.run);
        js.reset();
        assert_eq!(js.sample(), ControlSample::NONE);
    }
}
