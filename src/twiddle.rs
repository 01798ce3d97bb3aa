//! Size-indexed constant tables consumed by every transform on a plan.
//!
//! Both tables are built once, when a plan is created, and are never written
//! again. The twiddle table holds the `size/2` principal roots of unity
//! `exp(-2πi k / size)`; stage `s` of the butterfly engine reads it with a
//! stride of `size >> (s + 1)`, so a single table serves every stage.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Returns `true` when `n` is a non-zero power of two.
#[inline]
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Reverse the lowest `bits` bits of `value`.
///
/// Bits of `value` at or above position `bits` are ignored, and
/// `reverse_bits(v, 0)` is always `0`.
///
/// ```
/// use fftplan::reverse_bits;
/// assert_eq!(reverse_bits(0b001, 3), 0b100);
/// assert_eq!(reverse_bits(0b110, 3), 0b011);
/// ```
#[inline]
pub const fn reverse_bits(value: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (usize::BITS - bits)
}

/// Build the twiddle table for a transform of length `size`.
///
/// Each entry is evaluated directly from its angle rather than by a rotation
/// recurrence, so rounding error does not accumulate along the table.
pub(crate) fn twiddle_table<T: Float>(size: usize) -> Box<[Complex<T>]> {
    let half = size / 2;
    let n = T::from_usize(size);
    let two_pi = T::pi() + T::pi();
    let mut table: Vec<Complex<T>> = Vec::with_capacity(half);
    for k in 0..half {
        let angle = -(two_pi * T::from_usize(k) / n);
        table.push(Complex::expi(angle));
    }
    table.into_boxed_slice()
}

/// Build the bit-reversal permutation for a transform with `stages` stages.
pub(crate) fn bit_reversal_table(size: usize, stages: u32) -> Box<[usize]> {
    (0..size).map(|i| reverse_bits(i, stages)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn power_of_two_predicate() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(!is_power_of_two(6));
        assert!(!is_power_of_two(7));
        assert!(is_power_of_two(1 << 20));
        assert!(!is_power_of_two(usize::MAX));
    }

    #[test]
    fn reverse_bits_matches_shift_loop() {
        fn slow(mut value: usize, bits: u32) -> usize {
            let mut result = 0;
            for _ in 0..bits {
                result = (result << 1) | (value & 1);
                value >>= 1;
            }
            result
        }
        for bits in 0..=10u32 {
            for v in 0..(1usize << bits) {
                assert_eq!(reverse_bits(v, bits), slow(v, bits), "v={v} bits={bits}");
            }
        }
        assert_eq!(reverse_bits(0b1_0110, 4), 0b0110);
    }

    #[test]
    fn permutation_is_an_involution() {
        for stages in 1..=12u32 {
            let size = 1usize << stages;
            let perm = bit_reversal_table(size, stages);
            assert_eq!(perm.len(), size);
            let mut seen = alloc::vec![false; size];
            for (i, &j) in perm.iter().enumerate() {
                assert!(j < size);
                assert!(!seen[j]);
                seen[j] = true;
                assert_eq!(perm[j], i);
            }
        }
    }

    #[test]
    fn twiddles_are_roots_of_unity() {
        let size = 64;
        let table = twiddle_table::<f64>(size);
        assert_eq!(table.len(), size / 2);
        assert_eq!(table[0], Complex64::new(1.0, 0.0));
        for (k, w) in table.iter().enumerate() {
            assert!((w.norm_sqr() - 1.0).abs() < 1e-12);
            let angle = -2.0 * core::f64::consts::PI * k as f64 / size as f64;
            assert!((w.re - libm::cos(angle)).abs() < 1e-12);
            assert!((w.im - libm::sin(angle)).abs() < 1e-12);
        }
        // k = size/4 is exactly -i
        assert!(table[size / 4].re.abs() < 1e-15);
        assert!((table[size / 4].im + 1.0).abs() < 1e-15);
    }

    #[test]
    fn trivial_sizes_have_small_tables() {
        assert!(twiddle_table::<f32>(1).is_empty());
        assert_eq!(twiddle_table::<f32>(2).len(), 1);
        assert_eq!(&*bit_reversal_table(1, 0), &[0]);
        assert_eq!(&*bit_reversal_table(2, 1), &[0, 1]);
    }
}
