//! Wall-clock timing of a kernel over a fixed input

use crate::error::{BenchError, Result};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::debug;

/// One harness run
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: String,
    /// Result of the last kernel call
    pub result: f64,
    pub elapsed: Duration,
    pub iterations: u64,
}

impl Measurement {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn avg_ns(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    /// Kernel calls per second
    pub fn throughput_ops(&self) -> f64 {
        self.iterations as f64 / self.elapsed_secs()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Result: {}, Time taken: {} seconds for {} iterations",
            self.label,
            self.result,
            self.elapsed_secs(),
            self.iterations
        )
    }
}

/// Time `iterations` back-to-back calls of `kernel(value)`
///
/// Only the last result is kept. The clock is read immediately before the
/// first call and immediately after the last one. Zero iterations is
/// rejected since no result would exist to report.
pub fn measure<F>(mut kernel: F, label: &str, value: f64, iterations: u64) -> Result<Measurement>
where
    F: FnMut(f64) -> f64,
{
    if iterations == 0 {
        return Err(BenchError::ZeroIterations);
    }

    let mut result = 0.0;
    let start = Instant::now();
    for _ in 0..iterations {
        result = black_box(kernel(black_box(value)));
    }
    let elapsed = start.elapsed();

    let measurement = Measurement {
        label: label.to_string(),
        result,
        elapsed,
        iterations,
    };

    debug!(
        label,
        iterations,
        elapsed_secs = measurement.elapsed_secs(),
        avg_ns = measurement.avg_ns(),
        throughput_ops = measurement.throughput_ops(),
        "Measurement complete"
    );

    Ok(measurement)
}

/// Measure and print the measurement line to stdout
pub fn run_and_report<F>(kernel: F, label: &str, value: f64, iterations: u64) -> Result<Measurement>
where
    F: FnMut(f64) -> f64,
{
    let measurement = measure(kernel, label, value, iterations)?;
    println!("{}", measurement);
    Ok(measurement)
}

/// Measure, print, and return elapsed seconds
pub fn benchmark<F>(kernel: F, label: &str, value: f64, iterations: u64) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    run_and_report(kernel, label, value, iterations).map(|m| m.elapsed_secs())
}
