#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

//// Utility functions

pub(crate) fn get_random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(-1_000_000, 1_000_000));
    }

    results
}

pub(crate) fn get_permutation(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results: Vec<i64> = (1..=n as i64).collect();
    results.shuffle(&mut rng);
    results
}
