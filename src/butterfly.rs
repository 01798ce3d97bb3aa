//! In-place radix-2 decimation-in-time butterfly engine.
//!
//! The engine never allocates. It permutes the caller's buffer into
//! bit-reversed order and then runs `log2(n)` stages over it. Stages are
//! strictly sequential; the groups of one stage touch disjoint, contiguous
//! chunks of the buffer and may be processed in any order, which is what the
//! optional `parallel` path exploits.

use crate::num::{Complex, Float};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Borrowed view of a plan's tables, handed to the engine per call.
#[derive(Clone, Copy)]
pub(crate) struct Tables<'a, T: Float> {
    pub twiddles: &'a [Complex<T>],
    pub permutation: &'a [usize],
    pub stages: u32,
}

/// Loop strategy for the butterfly passes. Never changes the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Schedule {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel { block_size: usize },
}

/// Unnormalized forward DFT of `buffer`, in place.
pub(crate) fn forward<T: Float>(
    buffer: &mut [Complex<T>],
    tables: Tables<'_, T>,
    schedule: Schedule,
) {
    bit_reverse(buffer, tables.permutation);
    run_stages::<T, false>(buffer, tables, schedule);
}

/// Inverse DFT of `buffer`, in place, scaled by `scale` (normally `1/n`).
pub(crate) fn inverse<T: Float>(
    buffer: &mut [Complex<T>],
    tables: Tables<'_, T>,
    schedule: Schedule,
    scale: T,
) {
    bit_reverse(buffer, tables.permutation);
    run_stages::<T, true>(buffer, tables, schedule);
    for c in buffer.iter_mut() {
        *c = c.scale(scale);
    }
}

/// Apply the bit-reversal permutation. Each transposition is swapped once,
/// from its lower index.
#[inline]
fn bit_reverse<T: Float>(buffer: &mut [Complex<T>], permutation: &[usize]) {
    for (i, &j) in permutation.iter().enumerate() {
        if i < j {
            buffer.swap(i, j);
        }
    }
}

fn run_stages<T: Float, const INVERSE: bool>(
    buffer: &mut [Complex<T>],
    tables: Tables<'_, T>,
    schedule: Schedule,
) {
    let n = buffer.len();
    for stage in 0..tables.stages {
        let butterfly_size = 1usize << stage;
        let group_step = butterfly_size << 1;
        let twiddle_step = n / group_step;
        match schedule {
            Schedule::Sequential => {
                for group in buffer.chunks_exact_mut(group_step) {
                    butterfly_group::<T, INVERSE>(group, tables.twiddles, twiddle_step);
                }
            }
            #[cfg(feature = "parallel")]
            Schedule::Parallel { block_size } => {
                parallel_stage::<T, INVERSE>(buffer, tables.twiddles, group_step, block_size)
            }
        }
    }
}

/// One group of a stage: `group.len() / 2` butterflies pairing the lower and
/// upper halves of the chunk.
#[inline(always)]
fn butterfly_group<T: Float, const INVERSE: bool>(
    group: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    twiddle_step: usize,
) {
    let half = group.len() / 2;
    let (lo, hi) = group.split_at_mut(half);
    let factors = twiddles.iter().step_by(twiddle_step);
    for ((a, b), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(factors) {
        butterfly::<T, INVERSE>(a, b, w);
    }
}

#[inline(always)]
fn butterfly<T: Float, const INVERSE: bool>(
    a: &mut Complex<T>,
    b: &mut Complex<T>,
    w: Complex<T>,
) {
    let w = if INVERSE { w.conj() } else { w };
    let t = *b * w;
    *b = *a - t;
    *a = *a + t;
}

/// Parallel rendition of one stage. Early stages have many small groups and
/// are split by group; late stages have few large groups and are split into
/// blocks of butterflies inside each group. Every butterfly is evaluated with
/// the same operands and operation order as the sequential loop, so the
/// output is bit-identical.
#[cfg(feature = "parallel")]
fn parallel_stage<T: Float, const INVERSE: bool>(
    buffer: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    group_step: usize,
    block_size: usize,
) {
    let n = buffer.len();
    let half = group_step / 2;
    let twiddle_step = n / group_step;
    let block = block_size.max(1);
    if half <= block {
        // many groups: enough chunks of at least `block` butterflies each
        let groups_per_task = (block / half).max(1);
        buffer
            .par_chunks_mut(group_step.saturating_mul(groups_per_task))
            .for_each(|chunk| {
                for group in chunk.chunks_exact_mut(group_step) {
                    butterfly_group::<T, INVERSE>(group, twiddles, twiddle_step);
                }
            });
    } else {
        for group in buffer.chunks_exact_mut(group_step) {
            let (lo, hi) = group.split_at_mut(half);
            lo.par_chunks_mut(block)
                .zip(hi.par_chunks_mut(block))
                .enumerate()
                .for_each(|(blk, (lo, hi))| {
                    let first = blk * block * twiddle_step;
                    let factors = twiddles[first..].iter().step_by(twiddle_step);
                    for ((a, b), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(factors) {
                        butterfly::<T, INVERSE>(a, b, w);
                    }
                });
        }
    }
}
