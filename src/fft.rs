//! Precomputed radix-2 FFT plans.
//!
//! An [`FftPlan`] validates its length once, builds the twiddle and
//! bit-reversal tables once, and then runs any number of in-place
//! [`forward`](FftPlan::forward) and [`inverse`](FftPlan::inverse) transforms
//! over caller-owned buffers. Transforms take `&self` and never allocate, so a
//! single plan can be shared across threads, each transforming its own buffer.
//! [`FftPlanner`] caches plans by length for callers that juggle many sizes.
//!
//! ```
//! use fftplan::{Complex32, FftPlan};
//!
//! let plan = FftPlan::<f32>::new(8).unwrap();
//! let mut data = [Complex32::zero(); 8];
//! data[0] = Complex32::new(1.0, 0.0);
//! plan.forward(&mut data).unwrap();
//! assert!(data.iter().all(|c| (c.re - 1.0).abs() < 1e-6 && c.im.abs() < 1e-6));
//! plan.inverse(&mut data).unwrap();
//! assert!((data[0].re - 1.0).abs() < 1e-6);
//! ```

use alloc::boxed::Box;
use alloc::sync::Arc;
#[cfg(feature = "std")]
use alloc::vec::Vec;
use hashbrown::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::butterfly::{self, Schedule, Tables};
use crate::num::{Complex, Float, Precision};
use crate::twiddle::{bit_reversal_table, is_power_of_two, twiddle_table};

/// Errors reported by plan construction and by transform calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The requested plan length is zero or not a power of two.
    InvalidSize(usize),
    /// The buffer handed to a transform holds no samples.
    EmptyInput,
    /// The buffer length does not match the plan length.
    MismatchedLengths { expected: usize, actual: usize },
}

/// Coarse classification of an [`FftError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building a plan.
    Configuration,
    /// Raised by a transform call before the buffer is touched.
    Buffer,
}

impl FftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FftError::InvalidSize(_) => ErrorKind::Configuration,
            FftError::EmptyInput | FftError::MismatchedLengths { .. } => ErrorKind::Buffer,
        }
    }
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidSize(n) => {
                write!(f, "FFT size {n} is not a non-zero power of two")
            }
            FftError::EmptyInput => write!(f, "sample buffer is empty"),
            FftError::MismatchedLengths { expected, actual } => write!(
                f,
                "sample buffer holds {actual} values but the plan expects {expected}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Options recorded on a plan at construction.
///
/// Precision is not part of the config: it is fixed by the plan's element
/// type (`FftPlan<f32>` or `FftPlan<f64>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftPlanConfig {
    /// Transforms overwrite the caller's buffer. Every transform runs in
    /// place; out-of-place helpers copy into the output first.
    pub in_place: bool,
    /// Allow the plan to pick a faster loop schedule (the rayon schedule when
    /// the `parallel` feature is enabled). Results are identical either way.
    pub acceleration: bool,
}

impl Default for FftPlanConfig {
    fn default() -> Self {
        Self {
            in_place: true,
            acceleration: true,
        }
    }
}

impl FftPlanConfig {
    /// Set [`in_place`](Self::in_place).
    pub fn with_in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }

    /// Set [`acceleration`](Self::acceleration).
    pub fn with_acceleration(mut self, acceleration: bool) -> Self {
        self.acceleration = acceleration;
        self
    }
}

/// Plan-based FFT: precomputed twiddles and bit-reversal for repeated transforms.
#[derive(Debug, Clone)]
pub struct FftPlan<T: Float> {
    size: usize,
    stages: u32,
    scale: T,
    twiddles: Box<[Complex<T>]>,
    permutation: Box<[usize]>,
    config: FftPlanConfig,
}

/// Single-precision plan.
pub type FftPlan32 = FftPlan<f32>;
/// Double-precision plan.
pub type FftPlan64 = FftPlan<f64>;

impl<T: Float> FftPlan<T> {
    /// Create a plan for length `size` with the default configuration.
    pub fn new(size: usize) -> Result<Self, FftError> {
        Self::with_config(size, FftPlanConfig::default())
    }

    /// Create a plan for length `size`.
    ///
    /// Fails with [`FftError::InvalidSize`] unless `size` is a non-zero power
    /// of two. Building the tables costs `O(size)` time and memory, paid once.
    pub fn with_config(size: usize, config: FftPlanConfig) -> Result<Self, FftError> {
        if !is_power_of_two(size) {
            warn!("rejecting FFT plan of size {}", size);
            return Err(FftError::InvalidSize(size));
        }
        #[cfg(feature = "parallel")]
        {
            if config.acceleration {
                crate::parallel::resolve_env();
            }
        }
        let stages = size.trailing_zeros();
        let plan = Self {
            size,
            stages,
            scale: T::one() / T::from_usize(size),
            twiddles: twiddle_table(size),
            permutation: bit_reversal_table(size, stages),
            config,
        };
        debug!(
            "built {} precision FFT plan: size={} stages={} in_place={} acceleration={}",
            T::PRECISION,
            size,
            stages,
            config.in_place,
            config.acceleration
        );
        Ok(plan)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Self::size).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of butterfly stages, `log2(size)`.
    pub fn stage_count(&self) -> u32 {
        self.stages
    }

    /// `1 / size` in the plan's precision; applied by [`inverse`](Self::inverse).
    pub fn scale_factor(&self) -> T {
        self.scale
    }

    pub fn precision(&self) -> Precision {
        T::PRECISION
    }

    pub fn is_in_place(&self) -> bool {
        self.config.in_place
    }

    pub fn config(&self) -> FftPlanConfig {
        self.config
    }

    /// The `size / 2` factors `exp(-2πi k / size)`.
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    /// The bit-reversal permutation of `0..size`.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    fn tables(&self) -> Tables<'_, T> {
        Tables {
            twiddles: &self.twiddles,
            permutation: &self.permutation,
            stages: self.stages,
        }
    }

    fn schedule(&self) -> Schedule {
        #[cfg(feature = "parallel")]
        {
            if self.config.acceleration && crate::parallel::should_parallelize_fft(self.size) {
                let block_size = crate::parallel::parallel_fft_block_size();
                trace!("parallel schedule for size {} (block {})", self.size, block_size);
                return Schedule::Parallel { block_size };
            }
        }
        Schedule::Sequential
    }

    fn check_len(&self, len: usize) -> Result<(), FftError> {
        if len == 0 {
            return Err(FftError::EmptyInput);
        }
        if len != self.size {
            return Err(FftError::MismatchedLengths {
                expected: self.size,
                actual: len,
            });
        }
        Ok(())
    }

    /// In-place forward transform: `X[k] = Σ x[n]·e^(−2πi·k·n/size)`, unnormalized.
    ///
    /// The buffer must hold exactly `size` samples; otherwise it is left
    /// untouched and a buffer error is returned.
    pub fn forward(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        butterfly::forward(buffer, self.tables(), self.schedule());
        Ok(())
    }

    /// In-place inverse transform, scaled by `1 / size` so that
    /// `inverse(forward(x)) ≈ x`.
    pub fn inverse(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        butterfly::inverse(buffer, self.tables(), self.schedule(), self.scale);
        Ok(())
    }

    /// Alias for [`forward`](Self::forward).
    pub fn fft(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        self.forward(buffer)
    }

    /// Alias for [`inverse`](Self::inverse).
    pub fn ifft(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        self.inverse(buffer)
    }

    /// Out-of-place FFT using the plan. `input` is never modified.
    pub fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_len(input.len())?;
        self.check_len(output.len())?;
        output.copy_from_slice(input);
        self.forward(output)
    }

    /// Out-of-place IFFT using the plan. `input` is never modified.
    pub fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_len(input.len())?;
        self.check_len(output.len())?;
        output.copy_from_slice(input);
        self.inverse(output)
    }

    fn check_batch(&self, len: usize) -> Result<(), FftError> {
        if len == 0 {
            return Err(FftError::EmptyInput);
        }
        if len % self.size != 0 {
            return Err(FftError::MismatchedLengths {
                expected: self.size,
                actual: len,
            });
        }
        Ok(())
    }

    /// Forward-transform every consecutive `size`-sample frame of `data`.
    ///
    /// `data.len()` must be a non-zero multiple of `size`; the check happens
    /// before any frame is transformed.
    pub fn fft_batch(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_batch(data.len())?;
        #[cfg(feature = "parallel")]
        {
            if self.par_frames(data.len()) {
                let tables = self.tables();
                data.par_chunks_exact_mut(self.size)
                    .for_each(|frame| butterfly::forward(frame, tables, Schedule::Sequential));
                return Ok(());
            }
        }
        let schedule = self.schedule();
        for frame in data.chunks_exact_mut(self.size) {
            butterfly::forward(frame, self.tables(), schedule);
        }
        Ok(())
    }

    /// Inverse-transform every consecutive `size`-sample frame of `data`.
    pub fn ifft_batch(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_batch(data.len())?;
        #[cfg(feature = "parallel")]
        {
            if self.par_frames(data.len()) {
                let tables = self.tables();
                let scale = self.scale;
                data.par_chunks_exact_mut(self.size).for_each(|frame| {
                    butterfly::inverse(frame, tables, Schedule::Sequential, scale)
                });
                return Ok(());
            }
        }
        let schedule = self.schedule();
        for frame in data.chunks_exact_mut(self.size) {
            butterfly::inverse(frame, self.tables(), schedule, self.scale);
        }
        Ok(())
    }

    // Frames are independent, so a long batch of short frames is split by frame.
    #[cfg(feature = "parallel")]
    fn par_frames(&self, len: usize) -> bool {
        self.config.acceleration
            && len > self.size
            && crate::parallel::should_parallelize_fft(len)
    }

    /// Allocate and return the forward transform of `input`.
    #[cfg(feature = "std")]
    pub fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.check_len(input.len())?;
        let mut out = input.to_vec();
        self.forward(&mut out)?;
        Ok(out)
    }

    /// Allocate and return the inverse transform of `input`.
    #[cfg(feature = "std")]
    pub fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.check_len(input.len())?;
        let mut out = input.to_vec();
        self.inverse(&mut out)?;
        Ok(out)
    }
}

/// Cache of shared plans keyed by length.
///
/// Every plan handed out shares the planner's [`FftPlanConfig`]. Plans are
/// returned as `Arc`s so they can outlive the planner and cross threads.
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<FftPlan<T>>>,
    config: FftPlanConfig,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self::with_config(FftPlanConfig::default())
    }

    pub fn with_config(config: FftPlanConfig) -> Self {
        Self {
            cache: HashMap::new(),
            config,
        }
    }

    /// Return the cached plan for `size`, building it on first use.
    pub fn plan(&mut self, size: usize) -> Result<Arc<FftPlan<T>>, FftError> {
        if let Some(plan) = self.cache.get(&size) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(FftPlan::with_config(size, self.config)?);
        self.cache.insert(size, Arc::clone(&plan));
        Ok(plan)
    }

    /// Number of cached plans.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached plan. Plans still held by callers stay valid.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
