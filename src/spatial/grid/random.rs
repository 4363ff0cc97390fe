use rand::Rng;

use super::*;

impl Grid {
    /// Set every cell alive with probability `probability`, dead otherwise.
    ///
    /// The probability is clamped to `[0, 1]`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        for cell in self.cells.iter_mut() {
            *cell = Cell::from(rng.gen_bool(p));
        }
    }
}
