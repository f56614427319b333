use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SMALL_INPUT_LIMIT: usize = 8_192;
const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 120;
const SMALL_MEASURE_MS: u64 = 220;
const LARGE_MEASURE_MS: u64 = 360;
const RNG_SEED: u64 = 0x5EED_2026;

/// Sampling settings scaled to the input size: large graphs switch to flat
/// sampling and a longer measurement window.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= SMALL_INPUT_LIMIT {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(SMALL_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(LARGE_MEASURE_MS));
    }
}

pub fn case_seed(size: usize, case_tag: u64) -> u64 {
    RNG_SEED ^ ((size as u64) << 7) ^ case_tag
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `count` random `(source, target)` pairs over `n` vertices.
pub fn query_pairs<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}
