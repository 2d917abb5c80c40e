//! Benchmark module
//! Kernel timing harness and cross-kernel comparison

pub mod compare;
pub mod harness;

pub use compare::{percentage_difference, run_comparison, ComparisonReport, Difference};
pub use harness::{benchmark, measure, run_and_report, Measurement};
