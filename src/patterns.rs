//! Input generators shared by the benchmark harness, tests and benches.

use rand::Rng;

/// Fresh array of `len` values drawn uniformly from `[0, len)`, the
/// fill rule the benchmark harness uses for every trial. The generator
/// is injected so a seeded rng reproduces the exact series.
pub fn random_uniform<R: Rng>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..len as i32)).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}
