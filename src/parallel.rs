//! Tuning for the rayon-backed butterfly schedule.
//!
//! A plan only parallelizes its stages when it was built with
//! [`FftPlanConfig::acceleration`](crate::FftPlanConfig) set and its length
//! reaches the parallel threshold. The threshold is, in order of precedence,
//! the value passed to [`set_parallel_fft_threshold`], the
//! `FFTPLAN_PAR_FFT_THRESHOLD` environment variable, or
//! `max(per_core_work, block_size) * threads`, saturating at `usize::MAX`.
//!
//! The environment is read once, when the first accelerated plan is built,
//! so transform calls never touch it.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// `0` means no override and the environment/heuristic value is used.
static PARALLEL_FFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_FFT_BLOCK_SIZE_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

const DEFAULT_PER_CORE_WORK: usize = 4096;
const DEFAULT_BLOCK_SIZE: usize = 1024;

struct ParallelEnv {
    threshold: usize,
    per_core_work: usize,
    block_size: usize,
    threads: usize,
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|v| v.parse::<usize>().ok())
}

fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| ParallelEnv {
        threshold: env_usize("FFTPLAN_PAR_FFT_THRESHOLD").unwrap_or(0),
        per_core_work: env_usize("FFTPLAN_PAR_FFT_PER_CORE_WORK")
            .unwrap_or(DEFAULT_PER_CORE_WORK),
        block_size: env_usize("FFTPLAN_PAR_FFT_BLOCK_SIZE").unwrap_or(DEFAULT_BLOCK_SIZE),
        threads: env_usize("FFTPLAN_PAR_FFT_THREADS").unwrap_or_else(|| num_cpus::get().max(1)),
    })
}

/// Read the environment now instead of on the first transform call.
pub(crate) fn resolve_env() {
    parallel_env();
}

fn heuristic_threshold(env: &ParallelEnv) -> usize {
    env.per_core_work
        .max(env.block_size)
        .saturating_mul(env.threads)
}

/// Set a custom minimum FFT length for the parallel schedule.
///
/// Passing `0` reverts to the environment variable or built-in heuristic.
pub fn set_parallel_fft_threshold(threshold: usize) {
    PARALLEL_FFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Override the number of butterflies handed to each rayon task. `0`
/// reverts to the environment variable or built-in default.
pub fn set_parallel_fft_block_size(size: usize) {
    PARALLEL_FFT_BLOCK_SIZE_OVERRIDE.store(size, Ordering::Relaxed);
}

/// The FFT length at or above which the parallel schedule engages.
pub fn parallel_fft_threshold() -> usize {
    let override_thr = PARALLEL_FFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    let env = parallel_env();
    if env.threshold != 0 {
        env.threshold
    } else {
        heuristic_threshold(env)
    }
}

pub(crate) fn parallel_fft_block_size() -> usize {
    let override_size = PARALLEL_FFT_BLOCK_SIZE_OVERRIDE.load(Ordering::Relaxed);
    if override_size != 0 {
        return override_size;
    }
    parallel_env().block_size
}

pub(crate) fn should_parallelize_fft(n: usize) -> bool {
    n >= parallel_fft_threshold()
}
