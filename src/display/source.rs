//! Where fresh display arrays come from

use super::Cell;
use crate::config::VALUE_RANGE;
use crate::trace::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Supplies a new, untagged display array of a requested size
pub trait ArraySource {
    fn regenerate(&mut self, size: usize) -> Vec<Cell>;
}

impl<S: ArraySource + ?Sized> ArraySource for Box<S> {
    fn regenerate(&mut self, size: usize) -> Vec<Cell> {
        (**self).regenerate(size)
    }
}

/// Uniformly random values drawn from a fixed display range
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
    range: RangeInclusive<Value>,
}

impl RandomSource<StdRng> {
    /// Entropy-seeded source over [`VALUE_RANGE`]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible source over [`VALUE_RANGE`]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomSource {
            rng,
            range: VALUE_RANGE,
        }
    }

    /// Draw from `range` instead of the default display range
    pub fn with_range(mut self, range: RangeInclusive<Value>) -> Self {
        self.range = range;
        self
    }
}

impl<R: Rng> ArraySource for RandomSource<R> {
    fn regenerate(&mut self, size: usize) -> Vec<Cell> {
        (0..size)
            .map(|_| Cell::new(self.rng.gen_range(self.range.clone())))
            .collect()
    }
}

/// Replays a fixed list of values, cycling it to fill the requested size.
///
/// An empty list always yields an empty array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    values: Vec<Value>,
}

impl FixedSource {
    pub fn new(values: Vec<Value>) -> Self {
        FixedSource { values }
    }
}

impl ArraySource for FixedSource {
    fn regenerate(&mut self, size: usize) -> Vec<Cell> {
        self.values
            .iter()
            .copied()
            .cycle()
            .take(size)
            .map(Cell::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::VisualTag;

    #[test]
    fn test_random_values_stay_in_range() {
        let mut source = RandomSource::seeded(7);
        let cells = source.regenerate(500);
        assert_eq!(cells.len(), 500);
        assert!(cells.iter().all(|c| VALUE_RANGE.contains(&c.value)));
        assert!(cells.iter().all(|c| c.tag == VisualTag::Default));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = RandomSource::seeded(42).regenerate(20);
        let b = RandomSource::seeded(42).regenerate(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_range() {
        let mut source = RandomSource::seeded(1).with_range(10..=10);
        assert!(source.regenerate(8).iter().all(|c| c.value == 10));
    }

    #[test]
    fn test_fixed_source_cycles() {
        let mut source = FixedSource::new(vec![5, 3, 8]);
        let values: Vec<Value> = source.regenerate(5).iter().map(|c| c.value).collect();
        assert_eq!(values, vec![5, 3, 8, 5, 3]);
        assert!(FixedSource::new(vec![]).regenerate(4).is_empty());
    }
}
