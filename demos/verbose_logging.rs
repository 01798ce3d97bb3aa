//! Demonstrates enabling verbose logging for fftplan.
use fftplan::{Complex32, FftPlan};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let plan = FftPlan::<f32>::new(8).unwrap();
    let mut signal = vec![Complex32::new(1.0, 0.0); 8];
    plan.forward(&mut signal).unwrap();

    // rejected sizes are logged at warn level
    let _ = FftPlan::<f32>::new(12);
}
