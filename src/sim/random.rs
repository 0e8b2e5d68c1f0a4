//! Injectable randomness
//!
//! The tick makes at most three draws: the spawn roll, then (only when
//! spawning) the spawn angle and the spawn distance, in that order.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform values in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Seeded PCG generator; the same seed replays the same run
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats `fallback`
#[cfg(test)]
pub(crate) struct ScriptedSource {
    draws: std::collections::VecDeque<f64>,
    fallback: f64,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(draws: &[f64], fallback: f64) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback,
        }
    }

    /// Every spawn roll fails
    pub(crate) fn never_spawn() -> Self {
        Self::new(&[], 0.999)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_in_unit_range() {
        let mut source = SeededSource::new(7);
        for _ in 0..1000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_source_replays() {
        let mut a = SeededSource::new(12345);
        let mut b = SeededSource::new(12345);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
        assert_eq!(a.seed(), 12345);
    }

    #[test]
    fn test_scripted_source() {
        let mut s = ScriptedSource::new(&[0.1, 0.2], 0.5);
        assert_eq!(s.next_unit(), 0.1);
        assert_eq!(s.remaining(), 1);
        assert_eq!(s.next_unit(), 0.2);
        assert_eq!(s.next_unit(), 0.5);
        assert_eq!(s.next_unit(), 0.5);
    }
}
