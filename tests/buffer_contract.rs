// Test intent: verifies transform calls reject bad buffers before touching them.
use fftplan::{Complex32, Complex64, ErrorKind, FftError, FftPlan32, FftPlan64};

fn marked(n: usize) -> Vec<Complex32> {
    (0..n).map(|i| Complex32::new(i as f32, -(i as f32))).collect()
}

#[test]
fn empty_buffer_is_a_buffer_error() {
    let plan = FftPlan32::new(8).unwrap();
    let mut data: [Complex32; 0] = [];
    assert_eq!(plan.forward(&mut data), Err(FftError::EmptyInput));
    assert_eq!(plan.inverse(&mut data), Err(FftError::EmptyInput));
    assert_eq!(FftError::EmptyInput.kind(), ErrorKind::Buffer);
}

#[test]
fn wrong_length_buffers_are_rejected_untouched() {
    let plan = FftPlan32::new(8).unwrap();
    for &len in &[1usize, 4, 7, 9, 16] {
        let original = marked(len);
        let mut data = original.clone();
        let expected = Err(FftError::MismatchedLengths {
            expected: 8,
            actual: len,
        });
        assert_eq!(plan.forward(&mut data), expected);
        assert_eq!(data, original, "forward mutated a {len}-sample buffer");
        assert_eq!(plan.inverse(&mut data), expected);
        assert_eq!(data, original, "inverse mutated a {len}-sample buffer");
    }
}

#[test]
fn out_of_place_checks_both_sides() {
    let plan = FftPlan64::new(4).unwrap();
    let input = vec![Complex64::new(1.0, 1.0); 4];
    let mut short_out = vec![Complex64::zero(); 2];
    assert_eq!(
        plan.fft_out_of_place(&input, &mut short_out),
        Err(FftError::MismatchedLengths {
            expected: 4,
            actual: 2
        })
    );
    assert!(short_out.iter().all(|c| *c == Complex64::zero()));

    let short_in = vec![Complex64::new(1.0, 1.0); 3];
    let mut out = vec![Complex64::zero(); 4];
    assert!(plan.ifft_out_of_place(&short_in, &mut out).is_err());
    assert!(out.iter().all(|c| *c == Complex64::zero()));
    assert_eq!(plan.fft_out_of_place(&[], &mut out), Err(FftError::EmptyInput));
}

#[test]
fn vec_helpers_validate_length() {
    let plan = FftPlan64::new(8).unwrap();
    assert_eq!(
        plan.fft_vec(&[Complex64::zero(); 5]),
        Err(FftError::MismatchedLengths {
            expected: 8,
            actual: 5
        })
    );
    assert_eq!(plan.ifft_vec(&[]), Err(FftError::EmptyInput));
}

#[test]
fn batch_rejects_partial_frames_before_any_work() {
    let plan = FftPlan32::new(4).unwrap();
    let original = marked(11);
    let mut data = original.clone();
    assert_eq!(
        plan.fft_batch(&mut data),
        Err(FftError::MismatchedLengths {
            expected: 4,
            actual: 11
        })
    );
    assert_eq!(data, original);
}

#[test]
fn a_valid_call_after_a_rejected_one_still_works() {
    let plan = FftPlan32::new(4).unwrap();
    let mut bad = marked(3);
    assert!(plan.forward(&mut bad).is_err());
    let mut good = vec![Complex32::new(1.0, 0.0); 4];
    plan.forward(&mut good).unwrap();
    assert!((good[0].re - 4.0).abs() < 1e-6);
    assert!(good[1..].iter().all(|c| c.norm_sqr() < 1e-12));
}
