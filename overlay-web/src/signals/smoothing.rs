//! First-order exponential smoothing
//!
//! `s' = s + (x - s) * factor`. Starts from zero rather than from the first
//! sample, so early outputs ramp up from rest.

#[derive(Clone, Debug)]
pub struct ExponentialSmoother {
    factor: f32,
    value: f32,
}

impl ExponentialSmoother {
    pub fn new(factor: f32) -> Self {
        assert!(factor > 0.0 && factor <= 1.0, "Smoothing factor must be in (0, 1]");
        Self { factor, value: 0.0 }
    }

    /// Step toward `target` and return the new value
    pub fn update(&mut self, target: f32) -> f32 {
        self.value += (target - self.value) * self.factor;
        self.value
    }

    /// Step toward `target`, then clamp the stored value to `[min, max]`
    pub fn update_clamped(&mut self, target: f32, min: f32, max: f32) -> f32 {
        self.update(target);
        self.value = self.value.clamp(min, max);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_factor_steps() {
        let mut smoother = ExponentialSmoother::new(0.5);
        assert_eq!(smoother.update(10.0), 5.0);
        assert_eq!(smoother.update(10.0), 7.5);
        assert_eq!(smoother.update(0.0), 3.75);
    }

    #[test]
    fn test_factor_one_tracks_input() {
        let mut smoother = ExponentialSmoother::new(1.0);
        assert_eq!(smoother.update(3.0), 3.0);
        assert_eq!(smoother.update(-2.0), -2.0);
    }

    #[test]
    fn test_clamped_update_stays_in_range() {
        let mut smoother = ExponentialSmoother::new(0.5);
        for _ in 0..20 {
            let v = smoother.update_clamped(100.0, -1.0, 1.0);
            assert!(v <= 1.0);
        }
        assert_eq!(smoother.value(), 1.0);
    }

    #[test]
    #[should_panic(expected = "Smoothing factor must be in (0, 1]")]
    fn test_zero_factor_rejected() {
        let _ = ExponentialSmoother::new(0.0);
    }
}
