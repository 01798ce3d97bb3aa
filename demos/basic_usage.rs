//! Basic usage example for fftplan
//!
//! Builds one plan, reuses it across buffers, and shows how bad sizes and
//! bad buffers are reported.

use fftplan::{Complex32, FftPlan, FftPlanConfig, FftPlanner};

fn main() {
    println!("=== fftplan Basic Usage Example ===\n");

    // 1. Forward and inverse transforms on one plan
    println!("1. Forward / inverse FFT");
    let plan = FftPlan::<f32>::new(4).unwrap();
    let mut data = vec![
        Complex32::new(1.0, 0.0),
        Complex32::new(2.0, 0.0),
        Complex32::new(3.0, 0.0),
        Complex32::new(4.0, 0.0),
    ];
    println!("   Input: {:?}", data.iter().map(|c| c.re).collect::<Vec<_>>());
    plan.forward(&mut data).unwrap();
    println!(
        "   FFT: {:?}",
        data.iter()
            .map(|c| format!("{:.2}+{:.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );

    // Reuse the same plan on another buffer
    let mut other = vec![Complex32::new(1.0, 0.0); 4];
    plan.forward(&mut other).unwrap();
    println!("   FFT of constant: {:?}", other.iter().map(|c| c.re).collect::<Vec<_>>());

    plan.inverse(&mut data).unwrap();
    println!("   IFFT: {:?}", data.iter().map(|c| c.re).collect::<Vec<_>>());
    println!();

    // 2. Plan details
    println!("2. Plan details");
    let plan = FftPlan::<f64>::with_config(1024, FftPlanConfig::default()).unwrap();
    println!(
        "   size={} stages={} precision={} scale={}",
        plan.size(),
        plan.stage_count(),
        plan.precision(),
        plan.scale_factor()
    );
    println!();

    // 3. Errors
    println!("3. Errors");
    match FftPlan::<f32>::new(1000) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   new(1000): {e}"),
    }
    let mut short = vec![Complex32::zero(); 3];
    if let Err(e) = FftPlan::<f32>::new(8).unwrap().forward(&mut short) {
        println!("   forward(3 samples): {e}");
    }
    println!();

    // 4. Planner cache
    println!("4. Planner");
    let mut planner = FftPlanner::<f32>::new();
    for n in [256, 512, 256] {
        let plan = planner.plan(n).unwrap();
        println!("   plan({n}) -> size {}", plan.size());
    }
    println!("   cached plans: {}", planner.len());
}
