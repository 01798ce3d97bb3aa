//! # fftplan - precomputed radix-2 FFT plans
//!
//! Build an [`FftPlan`] once for a power-of-two length, then run as many
//! in-place forward and inverse transforms as you like over your own buffers.
//! The plan owns its twiddle and bit-reversal tables; transforms borrow the
//! plan immutably and allocate nothing, so one plan can serve many threads.
//!
//! ## Features
//!
//! - **Generic precision**: `FftPlan<f32>` and `FftPlan<f64>`, statically dispatched
//! - **Zero-allocation transforms** over caller-owned `&mut [Complex<T>]`
//! - **Validated boundaries**: bad sizes and bad buffers are typed errors,
//!   reported before any sample is touched
//! - **Parallel stages** (optional) using Rayon
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and `Vec`-returning helpers
//! - `parallel`: split butterfly groups and batch frames across threads with Rayon
//! - `verbose-logging`: emit plan construction and scheduling records through `log`
//!
//! ## Example
//!
//! ```
//! use fftplan::{Complex64, FftPlan};
//!
//! let plan = FftPlan::<f64>::new(4)?;
//! let mut data: Vec<Complex64> = (1..=4).map(|v| Complex64::new(v as f64, 0.0)).collect();
//! plan.forward(&mut data)?;
//! assert!((data[0].re - 10.0).abs() < 1e-12);
//! plan.inverse(&mut data)?;
//! assert!((data[3].re - 4.0).abs() < 1e-12);
//! # Ok::<(), fftplan::FftError>(())
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Logging shims: records go to `log` with `verbose-logging`, and vanish otherwise.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "verbose-logging"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        log::warn!($($arg)*);
        #[cfg(not(feature = "verbose-logging"))]
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "parallel")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "verbose-logging"))]
        let _ = format_args!($($arg)*);
    }};
}

/// In-place radix-2 butterfly engine driven by a plan's tables.
mod butterfly;

/// Plan construction, validation and the public transform calls.
pub mod fft;

/// Float and complex element types.
pub mod num;

/// Thresholds for the parallel butterfly schedule.
#[cfg(feature = "parallel")]
pub mod parallel;

/// Twiddle and bit-reversal table construction.
pub mod twiddle;

pub use fft::{ErrorKind, FftError, FftPlan, FftPlan32, FftPlan64, FftPlanConfig, FftPlanner};
pub use num::{Complex, Complex32, Complex64, Float, Precision};
#[cfg(feature = "parallel")]
pub use parallel::{parallel_fft_threshold, set_parallel_fft_block_size, set_parallel_fft_threshold};
pub use twiddle::{is_power_of_two, reverse_bits};
