//! Fixed-timestep clock decoupling simulation from frame callbacks.

/// Fixed-step clock fed by an irregular per-frame time source.
///
/// Each callback is converted into a deterministic run of whole fixed steps
/// plus one trailing partial step that consumes the remainder, so no wall
/// time is lost or double-counted between callbacks.
pub struct FixedStepClock {
    fixed_step: f64,
    last_time: f64,
    has_reference: bool,
    accumulated: f64,
}

impl FixedStepClock {
    pub fn new(fixed_step: f64) -> Result<Self, String> {
        if !fixed_step.is_finite() || fixed_step <= 0.0 {
            return Err(format!(
                "Fixed step must be a positive duration, got {}",
                fixed_step
            ));
        }
        Ok(Self {
            fixed_step,
            last_time: 0.0,
            has_reference: false,
            accumulated: 0.0,
        })
    }

    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Drop the time reference so the next callback re-anchors instead of
    /// seeing one huge delta (scene restart, discontinuous time source).
    pub fn reset(&mut self) {
        self.has_reference = false;
        self.accumulated = 0.0;
    }

    /// Advance to wall-clock time `now_s` (seconds, monotonically
    /// non-decreasing), invoking `tick(dt)` for every whole fixed step owed
    /// plus one trailing partial step, which may be zero-duration. Returns
    /// the number of whole fixed steps run.
    ///
    /// The very first call after construction or `reset` only anchors the
    /// reference time and simulates nothing.
    pub fn advance<F: FnMut(f64)>(&mut self, now_s: f64, mut tick: F) -> u32 {
        if !self.has_reference {
            self.last_time = now_s;
            self.has_reference = true;
            return 0;
        }

        let dt = now_s - self.last_time;
        self.accumulated += dt;

        let mut whole_steps = 0;
        while self.accumulated >= self.fixed_step {
            tick(self.fixed_step);
            self.accumulated -= self.fixed_step;
            whole_steps += 1;
        }
        // The trailing partial step keeps motion continuous instead of
        // holding the remainder hostage until the next callback.
        tick(self.accumulated);
        self.accumulated = 0.0;

        self.last_time = now_s;
        whole_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 1.0 / 500.0;

    fn collect_steps(clock: &mut FixedStepClock, now_s: f64) -> Vec<f64> {
        let mut steps = Vec::new();
        clock.advance(now_s, |dt| steps.push(dt));
        steps
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(FixedStepClock::new(0.0).is_err());
        assert!(FixedStepClock::new(-0.01).is_err());
        assert!(FixedStepClock::new(f64::NAN).is_err());
    }

    #[test]
    fn test_first_call_only_anchors() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        let steps = collect_steps(&mut clock, 123.456);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_whole_steps_plus_trailing_partial() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        collect_steps(&mut clock, 0.0);

        // 5 ms = 2 whole 2 ms steps and a 1 ms remainder
        let steps = collect_steps(&mut clock, 0.005);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], STEP);
        assert_eq!(steps[1], STEP);
        assert!(steps[2] > 0.0 && steps[2] < STEP);
        assert!((steps.iter().sum::<f64>() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_zero_delta_runs_single_zero_step() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        collect_steps(&mut clock, 1.0);
        let steps = collect_steps(&mut clock, 1.0);
        assert_eq!(steps, vec![0.0]);
    }

    #[test]
    fn test_no_time_lost_across_callbacks() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        let times = [0.0, 0.013, 0.0131, 0.0295, 0.0467, 0.1];
        clock.advance(times[0], |_| {});

        let mut total = 0.0;
        for &t in &times[1..] {
            clock.advance(t, |dt| total += dt);
        }
        assert!((total - (times[times.len() - 1] - times[0])).abs() < 1e-9);
    }

    #[test]
    fn test_sixty_fps_callback_tick_count() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        let mut whole = 0;
        for &t in &[0.0, 0.0167, 0.0334] {
            whole += clock.advance(t, |_| {});
        }
        let expected = (0.0334f64 / STEP).floor() as u32;
        assert!(
            whole + 1 >= expected && whole <= expected + 1,
            "expected about {} whole steps, got {}",
            expected,
            whole
        );
    }

    #[test]
    fn test_reset_drops_reference() {
        let mut clock = FixedStepClock::new(STEP).unwrap();
        collect_steps(&mut clock, 0.0);
        collect_steps(&mut clock, 0.01);

        clock.reset();

        // A discontinuous jump after reset must not produce a huge delta
        let steps = collect_steps(&mut clock, 50.0);
        assert!(steps.is_empty());
        let steps = collect_steps(&mut clock, 50.005);
        assert_eq!(steps.len(), 3);
    }
}
