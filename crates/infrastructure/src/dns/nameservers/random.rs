use std::sync::{Arc, Mutex};

/// Source of uniform indices for picking a nameserver.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    #[inline]
    fn next_index(&self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Thread-local `fastrand` generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastRandom;

impl RandomSource for FastRandom {
    #[inline]
    fn next_index(&self, bound: usize) -> usize {
        fastrand::usize(..bound)
    }
}

/// Seeded generator for reproducible draws.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, bound: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.usize(..bound)
    }
}
