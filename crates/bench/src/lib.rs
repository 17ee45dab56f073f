use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Container sizes every traversal benchmark sweeps over.
pub const CONTAINER_SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
/// Elements are drawn from `-VALUE_BOUND..=VALUE_BOUND`.
pub const VALUE_BOUND: u32 = 1_000_000;

// Computing an ordering is one sort; a cursor walk adds a sort plus a pass.
const ORDER_SAMPLE_SIZE: usize = 20;
const ORDER_WARM_UP_MS: u64 = 150;
const ORDER_MEASURE_MS: u64 = 300;
const WALK_SAMPLE_SIZE: usize = 15;
const WALK_WARM_UP_MS: u64 = 400;
const WALK_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_order_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(ORDER_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(ORDER_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(ORDER_MEASURE_MS));
}

pub fn apply_walk_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(WALK_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WALK_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(WALK_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `-bound..=bound`.
///
/// Bounds past `i32::MAX` are clamped to it.
pub fn random_elements<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: u32) -> Vec<i32> {
    let bound = i32::try_from(bound).unwrap_or(i32::MAX);
    (0..len).map(|_| rng.random_range(-bound..=bound)).collect()
}
