// Test intent: verifies one plan can serve concurrent transforms on distinct buffers.
use std::sync::Arc;
use std::thread;

use fftplan::{Complex64, FftPlan64, FftPlanner};

fn signal(seed: usize, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let x = ((i * 31 + seed * 17) % 101) as f64 / 101.0;
            Complex64::new(x - 0.5, 0.25 - x * x)
        })
        .collect()
}

#[test]
fn borrowed_plan_across_scoped_threads() {
    let n = 2048;
    let plan = FftPlan64::new(n).unwrap();
    let expected: Vec<Vec<Complex64>> = (0..8).map(|s| plan.fft_vec(&signal(s, n)).unwrap()).collect();

    let results: Vec<Vec<Complex64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|s| {
                let plan = &plan;
                scope.spawn(move || {
                    let mut data = signal(s, n);
                    for _ in 0..10 {
                        plan.forward(&mut data).unwrap();
                        plan.inverse(&mut data).unwrap();
                    }
                    plan.forward(&mut data).unwrap();
                    data
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (got, want) in results.iter().zip(expected.iter()) {
        for (a, b) in got.iter().zip(want.iter()) {
            assert!((a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9);
        }
    }
}

#[test]
fn planner_arcs_travel_to_spawned_threads() {
    let mut planner = FftPlanner::<f64>::new();
    let plan: Arc<FftPlan64> = planner.plan(256).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|s| {
            let plan = Arc::clone(&plan);
            thread::spawn(move || {
                let original = signal(s, plan.size());
                let mut data = original.clone();
                plan.forward(&mut data).unwrap();
                plan.inverse(&mut data).unwrap();
                data.iter()
                    .zip(original.iter())
                    .map(|(a, b)| (a.re - b.re).abs().max((a.im - b.im).abs()))
                    .fold(0.0f64, f64::max)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap() < 1e-12);
    }
    assert!(Arc::ptr_eq(&plan, &planner.plan(256).unwrap()));
}
