use fftplan::{Complex32, FftPlan, FftPlanConfig};
use std::time::Instant;

fn main() {
    let size = 1 << 18;
    let data: Vec<Complex32> = (0..size)
        .map(|i| Complex32::new((i as f32 * 0.1).sin(), (i as f32 * 0.1).cos()))
        .collect();

    fftplan::set_parallel_fft_threshold(1 << 12);
    let seq = FftPlan::<f32>::with_config(size, FftPlanConfig::default().with_acceleration(false))
        .unwrap();
    let par = FftPlan::<f32>::new(size).unwrap();

    let seq_time = {
        let mut buf = data.clone();
        let start = Instant::now();
        seq.forward(&mut buf).unwrap();
        start.elapsed()
    };
    let par_time = {
        let mut buf = data.clone();
        let start = Instant::now();
        par.forward(&mut buf).unwrap();
        start.elapsed()
    };

    println!("Sequential:                 {:?}", seq_time);
    println!(
        "Parallel   ({} threads): {:?}",
        rayon::current_num_threads(),
        par_time
    );
}
