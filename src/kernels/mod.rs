//! Square root kernels
//!
//! Three interchangeable `f64 -> f64` strategies:
//! - Standard: `f64::sqrt`, the accuracy baseline
//! - Basic SIMD: one `vsqrtpd` over a broadcast register, lane 0 extracted
//! - Optimized SIMD: scalar SSE2 seed refined by Newton-Raphson across lanes
//!
//! The SIMD kernels hang off [`Avx`], which can only be obtained through a
//! successful CPU feature check.

pub mod avx;

pub use avx::Avx;

/// Newton-Raphson steps applied by the optimized kernel
pub const NEWTON_ITERATIONS: usize = 5;

/// Standard library square root
#[inline]
pub fn sqrt_standard(value: f64) -> f64 {
    value.sqrt()
}

/// Kernels in the order the comparison runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    Standard,
    BasicSimd,
    OptimizedSimd,
}

impl KernelKind {
    pub const ALL: [KernelKind; 3] = [
        KernelKind::Standard,
        KernelKind::BasicSimd,
        KernelKind::OptimizedSimd,
    ];

    /// Label printed on the measurement line
    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Standard => "Standard sqrt",
            KernelKind::BasicSimd => "Basic SIMD",
            KernelKind::OptimizedSimd => "Optimized SIMD",
        }
    }

    /// Name used on the percentage difference lines
    pub fn short_name(self) -> &'static str {
        match self {
            KernelKind::Standard => "Standard",
            KernelKind::BasicSimd => "Basic SIMD",
            KernelKind::OptimizedSimd => "Optimized SIMD",
        }
    }

    /// Evaluate this kernel once. Not meant for the timing loop.
    pub fn evaluate(self, avx: Avx, value: f64) -> f64 {
        match self {
            KernelKind::Standard => sqrt_standard(value),
            KernelKind::BasicSimd => avx.sqrt(value),
            KernelKind::OptimizedSimd => avx.sqrt_newton(value),
        }
    }
}
