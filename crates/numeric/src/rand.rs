//! Quick-and-dirty deterministic PRNG.
//!
//! A 32-bit linear congruential generator in the Numerical Recipes
//! parameterization. Not suitable for statistics or cryptography; it is
//! small, fast, and reproducible across platforms, which is all the
//! procedural systems need.

/// Deterministic 32-bit LCG.
#[derive(Clone, Debug)]
pub struct QdRand {
    state: u32,
}

impl QdRand {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the raw 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform sample in `[0, 1)` using the high 24 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn unit_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    /// Uniform sample in `[lo, hi)`.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit_f32()
    }
}

impl Default for QdRand {
    fn default() -> Self {
        Self::new(0)
    }
}
