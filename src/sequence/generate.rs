//! Random sequence generation

use super::Value;
use rand::Rng;
use std::ops::RangeInclusive;

/// Generate `count` values drawn uniformly from `range`
pub fn random_values<R: Rng>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<Value>,
) -> Vec<Value> {
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}
