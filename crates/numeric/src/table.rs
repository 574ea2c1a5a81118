//! Uniformly sampled function tables with linear interpolation.

/// A function of one variable sampled at uniform intervals over
/// `[min, max]`, evaluated by linear interpolation and clamped at both
/// ends. Trades memory for per-sample cost on hot paths that would
/// otherwise evaluate a transcendental.
#[derive(Clone, Debug)]
pub struct LookupTable {
    min: f32,
    max: f32,
    values: Vec<f32>,
}

impl LookupTable {
    /// Sample `f` at `samples` uniform points across `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `samples < 2` or `max <= min`.
    #[must_use]
    pub fn from_fn<F>(min: f32, max: f32, samples: usize, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        assert!(samples >= 2, "a table needs at least two samples");
        assert!(max > min, "table domain must be non-empty");
        #[allow(clippy::cast_precision_loss)]
        let step = (max - min) / (samples - 1) as f32;
        #[allow(clippy::cast_precision_loss)]
        let values = (0..samples).map(|i| f(min + step * i as f32)).collect();
        Self { min, max, values }
    }

    /// Interpolated value at `x`, clamped to the table domain.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn sample(&self, x: f32) -> f32 {
        let last = self.values.len() - 1;
        let t = (x - self.min) / (self.max - self.min) * last as f32;
        let t = t.clamp(0.0, last as f32);
        let i = (t as usize).min(last - 1);
        let frac = t - i as f32;
        self.values[i] + (self.values[i + 1] - self.values[i]) * frac
    }

    #[must_use]
    pub fn domain(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reproduces_endpoints_exactly() {
        let table = LookupTable::from_fn(-1.0, 3.0, 16, |x| x * x);
        assert_relative_eq!(table.sample(-1.0), 1.0, max_relative = 1e-5);
        assert_relative_eq!(table.sample(3.0), 9.0, max_relative = 1e-5);
    }

    #[test]
    fn is_exact_for_linear_functions() {
        let table = LookupTable::from_fn(0.0, 10.0, 8, |x| 2.0 * x + 1.0);
        for x in [0.0, 0.37, 4.2, 9.99, 10.0] {
            assert_relative_eq!(table.sample(x), 2.0 * x + 1.0, max_relative = 1e-5);
        }
    }

    #[test]
    fn clamps_outside_the_domain() {
        let table = LookupTable::from_fn(0.0, 1.0, 4, |x| x);
        assert_relative_eq!(table.sample(-5.0), 0.0, epsilon = 1e-6);
        assert_relative_eq!(table.sample(5.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn approximates_smooth_functions() {
        let table = LookupTable::from_fn(0.0, std::f32::consts::PI, 256, f32::sin);
        for i in 0..100 {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f32 * 0.031;
            assert!((table.sample(x) - x.sin()).abs() < 1e-3);
        }
    }
}
