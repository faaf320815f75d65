//! Uniform random selection behind a small trait seam.

use rand::Rng;

/// Source of uniformly distributed indices for random draws.
///
/// The production implementation samples the process-wide thread-local RNG.
/// Tests substitute a fixed source to pin down which element gets selected
/// instead of asserting statistically.
pub trait Picker: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Draws from `rand`'s thread-local generator.
///
/// Not cryptographically secure and not deterministically seeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
