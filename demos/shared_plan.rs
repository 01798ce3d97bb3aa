//! One plan, many threads: each thread transforms its own buffer.
use std::sync::Arc;
use std::thread;

use fftplan::{Complex64, FftPlan};

fn main() {
    let n = 4096;
    let plan = Arc::new(FftPlan::<f64>::new(n).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let plan = Arc::clone(&plan);
            thread::spawn(move || {
                // a pure tone in bin `t + 1`
                let mut buf: Vec<Complex64> = (0..n)
                    .map(|i| {
                        let phase = 2.0 * std::f64::consts::PI * ((t + 1) * i) as f64 / n as f64;
                        Complex64::expi(phase)
                    })
                    .collect();
                plan.forward(&mut buf).unwrap();
                let peak = buf
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.norm_sqr().total_cmp(&b.1.norm_sqr()))
                    .map(|(k, _)| k)
                    .unwrap_or(0);
                (t, peak)
            })
        })
        .collect();

    for h in handles {
        let (t, peak) = h.join().unwrap();
        println!("thread {t}: spectral peak at bin {peak}");
    }
}
