//! Square root benchmark
//!
//! Times three square root strategies on one fixed input and reports how
//! they compare.
//!
//! ## Architecture
//! - Kernels: `f64::sqrt`, AVX `vsqrtpd`, AVX Newton-Raphson refinement
//! - Bench: generic timing harness and the three-way comparison driver
//! - Config: input value, iteration count and logging settings

#[cfg(not(target_arch = "x86_64"))]
compile_error!("sqrt-bench requires an x86_64 target with AVX");

pub mod bench;
pub mod config;
pub mod error;
pub mod kernels;

pub use bench::{benchmark, measure, run_comparison, ComparisonReport, Measurement};
pub use config::Config;
pub use error::{BenchError, Result};
pub use kernels::{sqrt_standard, Avx, KernelKind, NEWTON_ITERATIONS};
