/// Source of randomness for tile spawning.
///
/// Implemented for [`fastrand::Rng`]; tests and adapters can plug in their
/// own source to script placements.
pub trait TileRng {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl TileRng for fastrand::Rng {
    fn pick(&mut self, len: usize) -> usize {
        self.usize(..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.f64() < p
    }
}

/// Builds the session RNG, seeded when a seed is given.
pub fn rng_from_seed(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}
